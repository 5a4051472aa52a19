use axum::{
    Router,
    routing::{post, put},
};

use shared_database::Database;

use crate::handlers;

/// Mounted under `/reception`.
pub fn reception_routes(database: Database) -> Router {
    Router::new()
        .route("/walkin-bill", post(handlers::create_walkin_bill))
        .route("/queue/{entry_id}/call", put(handlers::call_patient))
        .route("/queue/{entry_id}/complete", put(handlers::complete_service))
        .with_state(database)
}
