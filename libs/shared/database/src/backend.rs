use async_trait::async_trait;
use serde_json::Value;

use crate::error::DatabaseError;

/// Row-level storage operations over JSON records keyed by table name.
///
/// Every row carries an integer `id` assigned by the backend on insert.
/// Identifiers increase monotonically within a table and are never reused.
#[async_trait]
pub trait RecordBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Stores `row` under a fresh identifier and returns the stored row.
    async fn insert(&self, table: &str, row: Value) -> Result<Value, DatabaseError>;

    /// All rows of `table`, ordered by identifier.
    async fn select_all(&self, table: &str) -> Result<Vec<Value>, DatabaseError>;

    /// Merges `patch` into the row with the given identifier.
    ///
    /// Returns `Ok(None)` without touching anything when no such row exists.
    async fn update_by_id(
        &self,
        table: &str,
        id: i64,
        patch: Value,
    ) -> Result<Option<Value>, DatabaseError>;
}
