use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use shared_database::{Database, DatabaseError};

use crate::models::{
    Appointment, AppointmentStatus, CancelOutcome, CreateAppointmentRequest, APPOINTMENTS_TABLE,
};

pub struct AppointmentService {
    database: Database,
}

impl AppointmentService {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
        }
    }

    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, DatabaseError> {
        debug!("Creating appointment for {} with {}", request.patient_name, request.doctor_name);

        let row = json!({
            "patient_name": request.patient_name,
            "doctor_name": request.doctor_name,
            "scheduled_time": request.scheduled_time.unwrap_or_else(Utc::now),
            "status": AppointmentStatus::Scheduled,
        });

        let appointment: Appointment = self.database
            .with_session(|session| async move {
                session.insert(APPOINTMENTS_TABLE, row).await
            })
            .await?;

        info!("Appointment {} scheduled for {}", appointment.id, appointment.scheduled_time);
        Ok(appointment)
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, DatabaseError> {
        let appointments: Vec<Appointment> = self.database
            .with_session(|session| async move {
                session.select_all(APPOINTMENTS_TABLE).await
            })
            .await?;

        debug!("Listed {} appointments", appointments.len());
        Ok(appointments)
    }

    /// Marks the appointment cancelled. Cancelling twice is not an error.
    pub async fn cancel_appointment(&self, appointment_id: i64) -> Result<CancelOutcome, DatabaseError> {
        let patch = json!({ "status": AppointmentStatus::Cancelled });

        let updated: Option<Appointment> = self.database
            .with_session(|session| async move {
                session.update_by_id(APPOINTMENTS_TABLE, appointment_id, patch).await
            })
            .await?;

        match updated {
            Some(appointment) => {
                info!("Appointment {} cancelled", appointment.id);
                Ok(CancelOutcome::Cancelled(appointment))
            }
            None => {
                debug!("Cancel requested for unknown appointment {}", appointment_id);
                Ok(CancelOutcome::NotFound)
            }
        }
    }
}
