use crate::error::FetchError;

/// The assembled view of a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub min_price: f64,
    pub shipping: String,
}

impl ProductRecord {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, min_price: f64, shipping: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_price,
            shipping: shipping.into(),
        }
    }
}

/// A single attribute as produced by one fetcher.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductField {
    Name(String),
    MinPrice(f64),
    Shipping(String),
}

impl ProductField {
    pub fn field_name(&self) -> &'static str {
        match self {
            ProductField::Name(_) => "name",
            ProductField::MinPrice(_) => "min_price",
            ProductField::Shipping(_) => "shipping",
        }
    }
}

/// What a fetcher hands back to the coordinator.
pub type FetchOutcome = Result<ProductField, FetchError>;

/// A product record under construction.
///
/// Every fetcher owns exactly one slot, so outcomes can be applied in
/// whatever order they complete.
#[derive(Debug, Default)]
pub struct ProductSlots {
    name: Option<String>,
    min_price: Option<f64>,
    shipping: Option<String>,
}

impl ProductSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fetched field in its slot. Each slot is written once per run.
    pub fn apply(&mut self, field: ProductField) {
        debug_assert!(!self.is_filled(&field), "{} written twice", field.field_name());
        match field {
            ProductField::Name(name) => self.name = Some(name),
            ProductField::MinPrice(price) => self.min_price = Some(price),
            ProductField::Shipping(date) => self.shipping = Some(date),
        }
    }

    fn is_filled(&self, field: &ProductField) -> bool {
        match field {
            ProductField::Name(_) => self.name.is_some(),
            ProductField::MinPrice(_) => self.min_price.is_some(),
            ProductField::Shipping(_) => self.shipping.is_some(),
        }
    }

    /// Converts the slots into a record, failing on the first empty slot.
    pub fn finish(self) -> Result<ProductRecord, FetchError> {
        Ok(ProductRecord {
            name: self.name.ok_or(FetchError::MissingField("name"))?,
            min_price: self.min_price.ok_or(FetchError::MissingField("min_price"))?,
            shipping: self.shipping.ok_or(FetchError::MissingField("shipping"))?,
        })
    }
}
