//! Product record and request payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored product row.
///
/// `price` stays text end to end: the API hands back exactly the decimal string it stored,
/// so no float rounding is ever applied to currency values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub seller: String,
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw `POST`/`PUT` body. Fields are kept as JSON values so a numeric price can be coerced
/// and a wrongly typed field reported as a validation error rather than a parse failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub seller: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

/// Validated fields for an insert or a full replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub seller: String,
    pub price: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, seller: impl Into<String>, price: impl Into<String>) -> Self {
        NewProduct {
            name: name.into(),
            seller: seller.into(),
            price: price.into(),
        }
    }
}
