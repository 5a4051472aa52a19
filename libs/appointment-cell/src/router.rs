// libs/appointment-cell/src/router.rs
use axum::{
    Router,
    routing::{get, post, put},
};

use shared_database::Database;

use crate::handlers;

/// Mounted under `/appointments`.
pub fn appointment_routes(database: Database) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/create", post(handlers::create_appointment))
        .route("/{appointment_id}/cancel", put(handlers::cancel_appointment))
        .with_state(database)
}
