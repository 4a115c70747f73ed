use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store key for a product record.
///
/// Identifiers are non-negative integers. Parsing from a path segment goes
/// through [`FromStr`], which is the only place a raw identifier is validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub(crate) i64);

impl ProductId {
    /// Build an identifier from a known-good value.
    ///
    /// Returns `None` for negative values.
    pub fn new(value: i64) -> Option<Self> {
        (value >= 0).then_some(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A raw identifier could not be turned into a [`ProductId`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("product id is not an integer: {0:?}")]
    NotAnInteger(String),

    #[error("product id must not be negative: {0}")]
    Negative(i64),
}

impl FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| ProductIdError::NotAnInteger(s.to_string()))?;
        ProductId::new(value).ok_or(ProductIdError::Negative(value))
    }
}

/// Catalog entry.
///
/// Field names are the JSON wire contract. Absent fields decode to their zero
/// value; only a field of the wrong type makes a body undecodable. A record is
/// replaced as a whole on every write; nothing mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub product_id: i64,
    pub sku: String,
    pub manufacturer: String,
    pub category_id: i64,
    pub weight: i64,
    pub some_other_id: i64,
}

impl Product {
    pub fn new(
        product_id: i64,
        sku: impl Into<String>,
        manufacturer: impl Into<String>,
        category_id: i64,
        weight: i64,
        some_other_id: i64,
    ) -> Self {
        Self {
            product_id,
            sku: sku.into(),
            manufacturer: manufacturer.into(),
            category_id,
            weight,
            some_other_id,
        }
    }
}
