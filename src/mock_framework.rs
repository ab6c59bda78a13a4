//! # Mock Framework
//!
//! Utilities for testing the loader against a fake product API.
//!
//! Use [`ProductApiMock::start`] to get a running server, mount responses per
//! [`Endpoint`], then hand [`ProductApiMock::client`] or
//! [`ProductApiMock::config`] to the code under test.

use std::time::Duration;
use serde_json::{json, Value};
use wiremock::{matchers::{method, path}, Mock, MockServer, ResponseTemplate};
use crate::app_system::Config;
use crate::clients::{Endpoint, ProductClient};

pub const PRODUCT_ID: &str = "1_7613513";

/// Body served for `endpoint` in the "Chair" scenario.
pub fn chair_body(endpoint: Endpoint) -> Value {
    match endpoint {
        Endpoint::Name => json!({ "name": "Chair" }),
        Endpoint::Price => json!({ "retail": { "from": { "value": 19.99 } } }),
        Endpoint::Shippings => json!({ "_embedded": { "items": [ { "date": { "from": "2024-01-01" } } ] } }),
    }
}

pub struct ProductApiMock {
    server: MockServer,
}

impl ProductApiMock {
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn client(&self) -> ProductClient {
        ProductClient::new(reqwest::Client::new(), self.uri())
    }

    pub fn config(&self) -> Config {
        Config::new(self.uri(), PRODUCT_ID)
    }

    pub async fn mount(&self, endpoint: Endpoint, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/products/{}{}", PRODUCT_ID, endpoint.path_suffix())))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_json(&self, endpoint: Endpoint, body: Value) {
        self.mount(endpoint, ResponseTemplate::new(200).set_body_json(body)).await;
    }

    pub async fn mount_raw(&self, endpoint: Endpoint, body: &str) {
        self.mount(endpoint, ResponseTemplate::new(200).set_body_string(body)).await;
    }

    pub async fn mount_status(&self, endpoint: Endpoint, status: u16) {
        self.mount(endpoint, ResponseTemplate::new(status)).await;
    }

    /// Serves the "Chair" scenario on all three endpoints.
    pub async fn mount_chair(&self) {
        for endpoint in Endpoint::ALL {
            self.mount_json(endpoint, chair_body(endpoint)).await;
        }
    }

    /// Serves the "Chair" scenario with a per-endpoint response delay,
    /// given in [`Endpoint::ALL`] order.
    pub async fn mount_chair_delayed(&self, delays: [Duration; 3]) {
        for (endpoint, delay) in Endpoint::ALL.into_iter().zip(delays) {
            let response = ResponseTemplate::new(200)
                .set_body_json(chair_body(endpoint))
                .set_delay(delay);
            self.mount(endpoint, response).await;
        }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
