use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;

use crate::backend::RecordBackend;
use crate::error::DatabaseError;
use crate::memory::InMemoryBackend;
use crate::supabase::SupabaseClient;

/// Handle to the record store, shared by every request.
///
/// Each operation works through its own [`Session`], acquired with
/// [`Database::session`] or [`Database::with_session`].
#[derive(Clone)]
pub struct Database {
    backend: Arc<dyn RecordBackend>,
    active_sessions: Arc<AtomicUsize>,
}

impl Database {
    pub fn new(backend: Arc<dyn RecordBackend>) -> Self {
        Self {
            backend,
            active_sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBackend::new()))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.is_configured() {
            debug!("Using Supabase record store at {}", config.supabase_url);
            Self::new(Arc::new(SupabaseClient::new(config)))
        } else {
            warn!("Supabase not configured, falling back to in-memory record store");
            Self::in_memory()
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn session(&self) -> Session {
        let id = Uuid::new_v4();
        let active = self.active_sessions.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Acquired session {} on {} ({} active)", id, self.backend.name(), active);

        Session {
            id,
            backend: self.backend.clone(),
            active_sessions: self.active_sessions.clone(),
        }
    }

    /// Runs `op` with a fresh session. The session is released when `op`
    /// finishes, whatever its result.
    pub async fn with_session<F, Fut, T>(&self, op: F) -> T
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = T>,
    {
        op(self.session()).await
    }

    pub fn active_sessions(&self) -> usize {
        self.active_sessions.load(Ordering::SeqCst)
    }
}

/// A unit of work against the record store. Released on drop.
pub struct Session {
    id: Uuid,
    backend: Arc<dyn RecordBackend>,
    active_sessions: Arc<AtomicUsize>,
}

impl Session {
    pub async fn insert<T>(&self, table: &str, row: Value) -> Result<T, DatabaseError>
    where
        T: DeserializeOwned,
    {
        let stored = self.backend.insert(table, row).await?;
        Ok(serde_json::from_value(stored)?)
    }

    pub async fn select_all<T>(&self, table: &str) -> Result<Vec<T>, DatabaseError>
    where
        T: DeserializeOwned,
    {
        self.backend
            .select_all(table)
            .await?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(DatabaseError::from))
            .collect()
    }

    pub async fn update_by_id<T>(
        &self,
        table: &str,
        id: i64,
        patch: Value,
    ) -> Result<Option<T>, DatabaseError>
    where
        T: DeserializeOwned,
    {
        match self.backend.update_by_id(table, id, patch).await? {
            Some(row) => Ok(Some(serde_json::from_value(row)?)),
            None => Ok(None),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let remaining = self.active_sessions.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Released session {} ({} active)", self.id, remaining);
    }
}
