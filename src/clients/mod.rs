//! HTTP clients for the product API.

mod product_client;

pub use product_client::*;
