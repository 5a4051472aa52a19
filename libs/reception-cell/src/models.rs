use serde::{Deserialize, Serialize};

pub const BILLS_TABLE: &str = "bills";

/// A bill raised at reception. `total_amount` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub service: String,
    pub description: String,
    pub total_amount: i64,
    pub status: String,
    pub patient_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWalkInBillRequest {
    pub service: String,
    pub description: String,
    pub total_amount: i64,
    pub status: String,
    #[serde(default)]
    pub patient_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCallResponse {
    pub message: String,
    pub doctor_assigned: String,
}
