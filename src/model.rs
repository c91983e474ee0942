//! Stock record and the request payload used by create/update.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// A persisted stock row. `id` maps to the `stockid` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Stock {
    #[sqlx(rename = "stockid")]
    pub id: i64,
    pub name: String,
    pub company: String,
    pub price: f64,
}

/// Body of POST/PUT. Missing fields fall back to empty/zero and are caught by [`StockPayload::validate`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StockPayload {
    pub name: String,
    pub company: String,
    pub price: f64,
}

impl StockPayload {
    /// Presence and positivity checks. Nothing is trimmed or rewritten.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if self.company.is_empty() {
            return Err(AppError::Validation("company is required".into()));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(AppError::Validation("price must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn into_stock(self, id: i64) -> Stock {
        Stock {
            id,
            name: self.name,
            company: self.company,
            price: self.price,
        }
    }
}
