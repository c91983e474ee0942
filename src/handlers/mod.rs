//! HTTP handlers for stock CRUD.

pub mod stock;
pub use stock::*;
