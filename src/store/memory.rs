//! In-process store with the same contract as the PostgreSQL one. Ids start at 1 and are never reused.

use super::StockStore;
use crate::error::AppError;
use crate::model::{Stock, StockPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Stock>,
}

#[derive(Clone, Default)]
pub struct MemoryStockStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> AppError {
    AppError::Db(sqlx::Error::Protocol("memory store lock poisoned".into()))
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn insert(&self, stock: &StockPayload) -> Result<i64, AppError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(id, stock.clone().into_stock(id));
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Stock>, AppError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Stock>, AppError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, stock: &StockPayload) -> Result<u64, AppError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = stock.clone().into_stock(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: f64) -> StockPayload {
        StockPayload {
            name: name.into(),
            company: format!("{name} Corp"),
            price,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = MemoryStockStore::new();
        assert_eq!(store.insert(&payload("A", 1.0)).await.unwrap(), 1);
        assert_eq!(store.insert(&payload("B", 2.0)).await.unwrap(), 2);
        assert_eq!(store.delete(2).await.unwrap(), 1);
        assert_eq!(store.insert(&payload("C", 3.0)).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let store = MemoryStockStore::new();
        let id = store.insert(&payload("A", 1.0)).await.unwrap();

        assert_eq!(store.update(id, &payload("A2", 5.0)).await.unwrap(), 1);
        assert_eq!(store.update(99, &payload("X", 5.0)).await.unwrap(), 0);
        let row = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row.name, "A2");
        assert_eq!(row.id, id);

        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert!(store.get_by_id(id).await.unwrap().is_none());
        assert!(store.is_empty());
    }
}
