use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};

use appointment_cell::{
    AppointmentService, AppointmentStatus, CancelOutcome, CreateAppointmentRequest,
};
use shared_database::Database;

fn request(patient: &str, doctor: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        patient_name: patient.to_string(),
        doctor_name: doctor.to_string(),
        scheduled_time: Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()),
    }
}

#[tokio::test]
async fn test_every_create_gets_a_fresh_id() {
    let database = Database::in_memory();
    let service = AppointmentService::new(&database);

    let mut ids = Vec::new();
    for n in 0..10 {
        let appointment = service
            .create_appointment(request(&format!("Patient {}", n), "Dr. Smith"))
            .await
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert!(!ids.contains(&appointment.id));
        ids.push(appointment.id);
    }

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_names_are_not_validated() {
    let database = Database::in_memory();
    let service = AppointmentService::new(&database);

    let appointment = service.create_appointment(request("", "")).await.unwrap();

    assert_eq!(appointment.patient_name, "");
    assert_eq!(appointment.doctor_name, "");
}

#[tokio::test]
async fn test_cancel_is_idempotent() {
    let database = Database::in_memory();
    let service = AppointmentService::new(&database);
    let created = service.create_appointment(request("Jane Doe", "Dr. Smith")).await.unwrap();

    let first = service.cancel_appointment(created.id).await.unwrap();
    let second = service.cancel_appointment(created.id).await.unwrap();

    assert_matches!(first, CancelOutcome::Cancelled(ref a) if a.status == AppointmentStatus::Cancelled);
    assert_matches!(second, CancelOutcome::Cancelled(ref a) if a.status == AppointmentStatus::Cancelled);

    let listed = service.list_appointments().await.unwrap();
    assert_eq!(listed[0].status, AppointmentStatus::Cancelled);
    assert_eq!(listed[0].patient_name, "Jane Doe");
}

#[tokio::test]
async fn test_cancel_unknown_id_mutates_nothing() {
    let database = Database::in_memory();
    let service = AppointmentService::new(&database);
    service.create_appointment(request("Jane Doe", "Dr. Smith")).await.unwrap();
    let before = service.list_appointments().await.unwrap();

    let outcome = service.cancel_appointment(999).await.unwrap();

    assert_matches!(outcome, CancelOutcome::NotFound);
    assert_eq!(service.list_appointments().await.unwrap(), before);
}

#[tokio::test]
async fn test_list_reflects_creates_and_cancels() {
    let database = Database::in_memory();
    let service = AppointmentService::new(&database);

    let total = 7;
    for n in 0..total {
        service.create_appointment(request(&format!("Patient {}", n), "Dr. Smith")).await.unwrap();
    }
    let cancelled_ids = [2, 5, 7];
    for id in cancelled_ids {
        service.cancel_appointment(id).await.unwrap();
    }
    // repeat one cancel; still three cancelled records
    service.cancel_appointment(5).await.unwrap();

    let listed = service.list_appointments().await.unwrap();
    assert_eq!(listed.len(), total);
    for appointment in &listed {
        let expected = if cancelled_ids.contains(&appointment.id) {
            AppointmentStatus::Cancelled
        } else {
            AppointmentStatus::Scheduled
        };
        assert_eq!(appointment.status, expected, "appointment {}", appointment.id);
    }

    let ids: Vec<i64> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, (1..=total as i64).collect::<Vec<_>>());

    // listing is restartable
    assert_eq!(service.list_appointments().await.unwrap(), listed);
}

#[tokio::test]
async fn test_sessions_are_released_after_each_operation() {
    let database = Database::in_memory();
    let service = AppointmentService::new(&database);

    service.create_appointment(request("Jane Doe", "Dr. Smith")).await.unwrap();
    service.list_appointments().await.unwrap();
    service.cancel_appointment(1).await.unwrap();
    service.cancel_appointment(42).await.unwrap();

    assert_eq!(database.active_sessions(), 0);
}
