use std::time::Instant;
use tracing::{debug, info, instrument};
use crate::domain::{decode_min_price, decode_name, decode_shipping, FetchOutcome, ProductField};
use crate::error::FetchError;

/// The product API endpoints that each contribute one field to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Name,
    Price,
    Shippings,
}

impl Endpoint {
    /// Every endpoint, in the order the sequential loader visits them.
    pub const ALL: [Endpoint; 3] = [Endpoint::Name, Endpoint::Price, Endpoint::Shippings];

    pub(crate) fn path_suffix(&self) -> &'static str {
        match self {
            Endpoint::Name => "",
            Endpoint::Price => "/price",
            Endpoint::Shippings => "/shippings",
        }
    }
}

/// Client for the product API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool
/// between clones, so each fetch task gets its own handle.
#[derive(Clone, Debug)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn endpoint_url(&self, endpoint: Endpoint, id: &str) -> String {
        format!("{}/products/{}{}", self.base_url, id, endpoint.path_suffix())
    }

    #[instrument(skip(self))]
    pub async fn fetch_name(&self, id: &str) -> Result<String, FetchError> {
        let body = self.get_body(&self.endpoint_url(Endpoint::Name, id)).await?;
        decode_name(&body)
    }

    #[instrument(skip(self))]
    pub async fn fetch_min_price(&self, id: &str) -> Result<f64, FetchError> {
        let body = self.get_body(&self.endpoint_url(Endpoint::Price, id)).await?;
        decode_min_price(&body)
    }

    #[instrument(skip(self))]
    pub async fn fetch_shipping(&self, id: &str) -> Result<String, FetchError> {
        let body = self.get_body(&self.endpoint_url(Endpoint::Shippings, id)).await?;
        decode_shipping(&body)
    }

    /// Fetches the record field served by `endpoint`.
    pub async fn fetch_field(&self, endpoint: Endpoint, id: &str) -> FetchOutcome {
        match endpoint {
            Endpoint::Name => self.fetch_name(id).await.map(ProductField::Name),
            Endpoint::Price => self.fetch_min_price(id).await.map(ProductField::MinPrice),
            Endpoint::Shippings => self.fetch_shipping(id).await.map(ProductField::Shipping),
        }
    }

    async fn get_body(&self, address: &str) -> Result<Vec<u8>, FetchError> {
        debug!(address, "Sending request");
        let start = Instant::now();

        let network_error = |source| FetchError::Network {
            address: address.to_string(),
            source,
        };

        let response = self.http.get(address).send().await.map_err(network_error)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                address: address.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(network_error)?;

        info!(address, elapsed = ?start.elapsed(), "fetch time");
        Ok(body.to_vec())
    }
}
