use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::backend::RecordBackend;
use crate::error::DatabaseError;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Value>,
}

/// Process-local record store. Contents are lost on shutdown.
#[derive(Default)]
pub struct InMemoryBackend {
    tables: RwLock<HashMap<String, Table>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordBackend for InMemoryBackend {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, DatabaseError> {
        let Value::Object(mut fields) = row else {
            return Err(DatabaseError::InvalidRow { table: table.to_string() });
        };

        let mut tables = self.tables.write().await;
        let entry = tables.entry(table.to_string()).or_default();

        entry.last_id += 1;
        let id = entry.last_id;
        fields.insert("id".to_string(), Value::from(id));

        let stored = Value::Object(fields);
        entry.rows.insert(id, stored.clone());
        debug!("Inserted row {} into {}", id, table);

        Ok(stored)
    }

    async fn select_all(&self, table: &str) -> Result<Vec<Value>, DatabaseError> {
        let tables = self.tables.read().await;

        Ok(tables
            .get(table)
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn update_by_id(
        &self,
        table: &str,
        id: i64,
        patch: Value,
    ) -> Result<Option<Value>, DatabaseError> {
        let Value::Object(changes) = patch else {
            return Err(DatabaseError::InvalidRow { table: table.to_string() });
        };

        let mut tables = self.tables.write().await;
        let Some(row) = tables.get_mut(table).and_then(|t| t.rows.get_mut(&id)) else {
            return Ok(None);
        };

        if let Value::Object(fields) = row {
            for (key, value) in changes {
                // identity is owned by the store
                if key != "id" {
                    fields.insert(key, value);
                }
            }
        }

        Ok(Some(row.clone()))
    }
}
