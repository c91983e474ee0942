//! Stock API: REST CRUD over a single `stocks` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Config, StoreBackend};
pub use error::{AppError, ConfigError};
pub use model::{Stock, StockPayload};
pub use routes::{app, common_routes, stock_routes};
pub use state::AppState;
pub use store::{ensure_stocks_table, MemoryStockStore, PgStockStore, StockStore};
