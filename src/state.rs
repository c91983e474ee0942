//! Shared application state for all routes. The store is opened at startup and closed on shutdown.

use crate::store::StockStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StockStore>,
}

impl AppState {
    pub fn new<S: StockStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
