//! PostgreSQL store: parameterized statements against `stocks(stockid, name, price, company)`.

use super::StockStore;
use crate::error::AppError;
use crate::model::{Stock, StockPayload};
use async_trait::async_trait;
use sqlx::postgres::Postgres;
use sqlx::PgPool;

const INSERT_SQL: &str = "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid::int8";
// Casts let SERIAL/NUMERIC columns from older schemas decode into i64/f64.
const SELECT_ONE_SQL: &str = "SELECT stockid::int8 AS stockid, name, price::float8 AS price, company FROM stocks WHERE stockid = $1";
const SELECT_ALL_SQL: &str = "SELECT stockid::int8 AS stockid, name, price::float8 AS price, company FROM stocks";
const UPDATE_SQL: &str = "UPDATE stocks SET name = $1, price = $2, company = $3 WHERE stockid = $4";
const DELETE_SQL: &str = "DELETE FROM stocks WHERE stockid = $1";

/// Create the `stocks` table if it does not exist. Idempotent; existing tables are left untouched.
pub async fn ensure_stocks_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS stocks (
            stockid BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            company TEXT NOT NULL
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn insert(&self, stock: &StockPayload) -> Result<i64, AppError> {
        tracing::debug!(sql = %INSERT_SQL, "query");
        sqlx::query_scalar::<Postgres, i64>(INSERT_SQL)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "insert stock failed");
                AppError::Db(e)
            })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Stock>, AppError> {
        tracing::debug!(sql = %SELECT_ONE_SQL, id, "query");
        let row = sqlx::query_as::<Postgres, Stock>(SELECT_ONE_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<Stock>, AppError> {
        tracing::debug!(sql = %SELECT_ALL_SQL, "query");
        let rows = sqlx::query_as::<Postgres, Stock>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, stock: &StockPayload) -> Result<u64, AppError> {
        tracing::debug!(sql = %UPDATE_SQL, id, "query");
        let result = sqlx::query(UPDATE_SQL)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "update stock failed");
                AppError::Db(e)
            })?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE_SQL, id, "query");
        let result = sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "delete stock failed");
                AppError::Db(e)
            })?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
