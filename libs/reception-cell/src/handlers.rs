use axum::{
    extract::{Path, State},
    Json,
};

use shared_database::Database;
use shared_models::error::AppError;
use shared_models::extract::QueryOrJson;
use shared_models::response::MessageResponse;

use crate::models::{Bill, CreateWalkInBillRequest, QueueCallResponse};
use crate::services::{BillingService, QueueService};

#[axum::debug_handler]
pub async fn create_walkin_bill(
    State(database): State<Database>,
    QueryOrJson(request): QueryOrJson<CreateWalkInBillRequest>,
) -> Result<Json<Bill>, AppError> {
    let service = BillingService::new(&database);

    let bill = service.create_walkin_bill(request).await?;

    Ok(Json(bill))
}

pub async fn call_patient(Path(entry_id): Path<i64>) -> Json<QueueCallResponse> {
    Json(QueueService::new().call_patient(entry_id))
}

pub async fn complete_service(Path(entry_id): Path<i64>) -> Json<MessageResponse> {
    Json(QueueService::new().complete_service(entry_id))
}
