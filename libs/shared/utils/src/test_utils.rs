use std::sync::Once;

use axum::{body::Body, response::Response};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_database::Database;

static TRACING: Once = Once::new();

/// Installs a test subscriber once per process so `RUST_LOG` works in tests.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_supabase_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_database(&self) -> Database {
        Database::from_config(&self.to_app_config())
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn appointment_row(
        id: i64,
        patient_name: &str,
        doctor_name: &str,
        scheduled_time: DateTime<Utc>,
        status: &str,
    ) -> Value {
        json!({
            "id": id,
            "patient_name": patient_name,
            "doctor_name": doctor_name,
            "scheduled_time": scheduled_time.to_rfc3339(),
            "status": status
        })
    }

    pub fn bill_row(
        id: i64,
        service: &str,
        description: &str,
        total_amount: i64,
        status: &str,
        patient_id: Option<i64>,
    ) -> Value {
        json!({
            "id": id,
            "service": service,
            "description": description,
            "total_amount": total_amount,
            "status": status,
            "patient_id": patient_id
        })
    }
}

/// Reads a full response body as JSON.
pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
