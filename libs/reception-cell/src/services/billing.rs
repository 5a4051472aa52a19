use serde_json::json;
use tracing::{debug, info};

use shared_database::{Database, DatabaseError};

use crate::models::{Bill, CreateWalkInBillRequest, BILLS_TABLE};

pub struct BillingService {
    database: Database,
}

impl BillingService {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
        }
    }

    /// Stores the bill as given. `patient_id` is not checked against any patient.
    pub async fn create_walkin_bill(
        &self,
        request: CreateWalkInBillRequest,
    ) -> Result<Bill, DatabaseError> {
        debug!("Creating walk-in bill for service {}", request.service);

        let row = json!({
            "service": request.service,
            "description": request.description,
            "total_amount": request.total_amount,
            "status": request.status,
            "patient_id": request.patient_id,
        });

        let bill: Bill = self.database
            .with_session(|session| async move {
                session.insert(BILLS_TABLE, row).await
            })
            .await?;

        info!("Walk-in bill {} created ({} {})", bill.id, bill.service, bill.status);
        Ok(bill)
    }
}
