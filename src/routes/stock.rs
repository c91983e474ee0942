//! Stock CRUD routes, plus the legacy paths older clients still call.

use crate::handlers::stock::{create_stock, delete_stock, get_stock, list_stocks, update_stock};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn stock_routes(state: AppState) -> Router {
    Router::new()
        .route("/stocks", get(list_stocks).post(create_stock))
        .route(
            "/stocks/:id",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .route("/stock", get(list_stocks))
        .route("/CreateStock", post(create_stock))
        .route("/deletestocks/:id", delete(delete_stock))
        .with_state(state)
}
