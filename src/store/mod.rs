//! Data access for the `stocks` table. Handlers only see the [`StockStore`] trait; the
//! concrete store is chosen at startup and injected through `AppState`.

mod memory;
mod postgres;

pub use memory::MemoryStockStore;
pub use postgres::{ensure_stocks_table, PgStockStore};

use crate::error::AppError;
use crate::model::{Stock, StockPayload};
use async_trait::async_trait;

/// One method per SQL statement. Each call is a single round-trip with no transaction.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Insert a row and return the generated id.
    async fn insert(&self, stock: &StockPayload) -> Result<i64, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Stock>, AppError>;

    /// All rows, unordered. Empty table yields an empty vec.
    async fn get_all(&self) -> Result<Vec<Stock>, AppError>;

    /// Overwrite every field of the row with `id`. Returns rows affected (0 when no match).
    async fn update(&self, id: i64, stock: &StockPayload) -> Result<u64, AppError>;

    /// Hard delete. Returns rows affected (0 when no match).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Connectivity check used at startup and by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release underlying resources on shutdown.
    async fn close(&self) {}
}
