use tracing::info;

use shared_models::response::MessageResponse;

use crate::models::QueueCallResponse;

const PLACEHOLDER_DOCTOR: &str = "Dr. Placeholder";

/// Reception queue actions. Entries are not persisted; these only acknowledge.
pub struct QueueService;

impl QueueService {
    pub fn new() -> Self {
        Self
    }

    pub fn call_patient(&self, entry_id: i64) -> QueueCallResponse {
        info!("Queue entry {} called for service", entry_id);

        QueueCallResponse {
            message: format!("Patient {} called for service", entry_id),
            doctor_assigned: PLACEHOLDER_DOCTOR.to_string(),
        }
    }

    pub fn complete_service(&self, entry_id: i64) -> MessageResponse {
        info!("Queue entry {} completed", entry_id);

        MessageResponse::new(format!("Service for patient {} marked as completed", entry_id))
    }
}

impl Default for QueueService {
    fn default() -> Self {
        Self::new()
    }
}
