//! Wire shapes of the product API and the extraction of the single value
//! each endpoint contributes to a [`ProductRecord`](super::ProductRecord).

use serde::Deserialize;
use crate::error::FetchError;

/// `GET /products/{id}`
#[derive(Debug, Deserialize)]
pub struct NameResponse {
    pub name: String,
}

/// `GET /products/{id}/price`
#[derive(Debug, Deserialize)]
pub struct PriceResponse {
    pub retail: RetailPrice,
}

#[derive(Debug, Deserialize)]
pub struct RetailPrice {
    pub from: PriceValue,
}

#[derive(Debug, Deserialize)]
pub struct PriceValue {
    pub value: f64,
}

/// `GET /products/{id}/shippings`
#[derive(Debug, Deserialize)]
pub struct ShippingResponse {
    #[serde(rename = "_embedded")]
    pub embedded: ShippingItems,
}

#[derive(Debug, Deserialize)]
pub struct ShippingItems {
    pub items: Vec<ShippingItem>,
}

#[derive(Debug, Deserialize)]
pub struct ShippingItem {
    pub date: ShippingDate,
}

#[derive(Debug, Deserialize)]
pub struct ShippingDate {
    pub from: String,
}

pub fn decode_name(body: &[u8]) -> Result<String, FetchError> {
    let response: NameResponse = serde_json::from_slice(body)?;
    Ok(response.name)
}

pub fn decode_min_price(body: &[u8]) -> Result<f64, FetchError> {
    let response: PriceResponse = serde_json::from_slice(body)?;
    Ok(response.retail.from.value)
}

/// Only the first shipping option is used; an empty list is a domain error,
/// not a decode error.
pub fn decode_shipping(body: &[u8]) -> Result<String, FetchError> {
    let response: ShippingResponse = serde_json::from_slice(body)?;
    response
        .embedded
        .items
        .into_iter()
        .next()
        .map(|item| item.date.from)
        .ok_or(FetchError::NoShippingElements)
}
