//! Stock CRUD handlers. Each handler validates its input, issues exactly one store call and
//! formats the result.

use crate::error::AppError;
use crate::model::{Stock, StockPayload};
use crate::response::MutationResponse;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid stock id '{}'", id_str)))
}

fn parse_body(body: Result<Json<StockPayload>, JsonRejection>) -> Result<StockPayload, AppError> {
    let Json(payload) = body.map_err(|e| AppError::BadRequest(format!("invalid request payload: {}", e.body_text())))?;
    payload.validate()?;
    Ok(payload)
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Stock>, AppError> {
    let id = parse_id(&id_str)?;
    let stock = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("stock {}", id)))?;
    Ok(Json(stock))
}

pub async fn list_stocks(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, AppError> {
    let stocks = state.store.get_all().await?;
    Ok(Json(stocks))
}

pub async fn create_stock(
    State(state): State<AppState>,
    body: Result<Json<StockPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let payload = parse_body(body)?;
    let id = state.store.insert(&payload).await?;
    tracing::info!(id, "stock created");
    Ok((StatusCode::CREATED, Json(MutationResponse::created(id))))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<StockPayload>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let payload = parse_body(body)?;
    let rows = state.store.update(id, &payload).await?;
    tracing::info!(id, rows, "stock updated");
    Ok(Json(MutationResponse::updated(id, rows)))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<MutationResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let rows = state.store.delete(id).await?;
    tracing::info!(id, rows, "stock deleted");
    Ok(Json(MutationResponse::deleted(id, rows)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
        for bad in ["abc", "1.5", "", "9999999999999999999999"] {
            assert!(matches!(parse_id(bad), Err(AppError::BadRequest(_))), "{bad}");
        }
    }
}
