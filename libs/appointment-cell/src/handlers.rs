// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Path, State},
    Json,
};

use shared_database::Database;
use shared_models::error::AppError;
use shared_models::extract::QueryOrJson;

use crate::models::{Appointment, CancelResponse, CreateAppointmentRequest};
use crate::services::AppointmentService;

#[axum::debug_handler]
pub async fn create_appointment(
    State(database): State<Database>,
    QueryOrJson(request): QueryOrJson<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let service = AppointmentService::new(&database);

    let appointment = service.create_appointment(request).await?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(database): State<Database>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let service = AppointmentService::new(&database);

    let appointments = service.list_appointments().await?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(database): State<Database>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<CancelResponse>, AppError> {
    let service = AppointmentService::new(&database);

    let outcome = service.cancel_appointment(appointment_id).await?;

    Ok(Json(CancelResponse::from(outcome)))
}
