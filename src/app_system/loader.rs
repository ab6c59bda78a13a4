use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, Instrument};
use crate::app_system::{Config, ErrorPolicy, LoadMode, Report};
use crate::clients::{Endpoint, ProductClient};
use crate::domain::{FetchOutcome, ProductRecord, ProductSlots};
use crate::error::FetchError;

/// Loads one product by fanning out to the three product API endpoints and
/// merging their answers into a single [`ProductRecord`].
///
/// **Fan-out:** one tokio task per [`Endpoint`], all sharing one HTTP client.
///
/// **Fan-in:** the `JoinSet` is drained completely before the record is
/// assembled. Each task contributes a different field, so completion order
/// does not matter and no locking is needed.
///
/// **Failure:** the first failed fetch is handled according to
/// [`Config::on_error`]. A partially filled record is never returned.
pub struct ProductLoader {
    client: ProductClient,
    config: Config,
}

impl ProductLoader {
    pub fn new(config: Config) -> Self {
        let client = ProductClient::new(reqwest::Client::new(), config.base_url.clone());
        Self::with_client(client, config)
    }

    pub fn with_client(client: ProductClient, config: Config) -> Self {
        Self { client, config }
    }

    #[instrument(name = "product_load", skip(self), fields(product_id = %self.config.product_id, mode = ?self.config.mode))]
    pub async fn load(&self) -> Result<ProductRecord, FetchError> {
        info!("Loading product data");
        let record = match self.config.mode {
            LoadMode::Concurrent => self.load_concurrent().await?,
            LoadMode::Sequential => self.load_sequential().await?,
        };
        info!(name = %record.name, "Product data loaded");
        Ok(record)
    }

    /// Loads the product and measures the wall-clock time from just before
    /// the first fetch to just after the merge.
    pub async fn load_timed(&self) -> Result<Report, FetchError> {
        let start = Instant::now();
        let record = self.load().await?;
        Ok(Report::new(start.elapsed(), record))
    }

    async fn load_concurrent(&self) -> Result<ProductRecord, FetchError> {
        let mut tasks = JoinSet::new();
        for endpoint in Endpoint::ALL {
            let client = self.client.clone();
            let product_id = self.config.product_id.clone();
            tasks.spawn(
                async move { client.fetch_field(endpoint, &product_id).await }.in_current_span(),
            );
        }

        let mut slots = ProductSlots::new();
        while let Some(joined) = tasks.join_next().await {
            let outcome: FetchOutcome =
                joined.unwrap_or_else(|e| Err(FetchError::Task(e.to_string())));
            match outcome {
                Ok(field) => {
                    debug!(field = field.field_name(), "Field fetched");
                    slots.apply(field);
                }
                Err(e) => {
                    let e = self.on_fetch_error(e);
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        slots.finish()
    }

    async fn load_sequential(&self) -> Result<ProductRecord, FetchError> {
        let mut slots = ProductSlots::new();
        for endpoint in Endpoint::ALL {
            match self.client.fetch_field(endpoint, &self.config.product_id).await {
                Ok(field) => slots.apply(field),
                Err(e) => return Err(self.on_fetch_error(e)),
            }
        }
        slots.finish()
    }

    /// Applies the error policy. Under [`ErrorPolicy::Exit`] this never returns.
    fn on_fetch_error(&self, err: FetchError) -> FetchError {
        error!(error = %err, "Product fetch failed");
        match self.config.on_error {
            ErrorPolicy::Exit => exit_with_error(&err),
            ErrorPolicy::Propagate => err,
        }
    }
}

fn exit_with_error(err: &FetchError) -> ! {
    println!("{}", err);
    std::process::exit(1)
}
