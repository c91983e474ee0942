//! Response bodies for mutating operations.

use serde::Serialize;

/// `{"id": …, "message": …}` returned by create, update and delete.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub id: i64,
    pub message: String,
}

impl MutationResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "Stock created successfully".into(),
        }
    }

    pub fn updated(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!("Updated successfully, total rows affected: {}", rows_affected),
        }
    }

    pub fn deleted(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!("Deleted successfully, total rows affected: {}", rows_affected),
        }
    }
}
