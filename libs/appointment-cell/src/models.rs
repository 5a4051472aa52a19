// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

pub const APPOINTMENTS_TABLE: &str = "appointments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub scheduled_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// `Scheduled` is initial; `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_name: String,
    pub doctor_name: String,
    #[serde(default, deserialize_with = "deserialize_scheduled_time")]
    pub scheduled_time: Option<DateTime<Utc>>, // defaults to now
}

/// Accepts RFC 3339 timestamps, and timestamps without an offset read as UTC.
fn deserialize_scheduled_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    parse_scheduled_time(raw.trim())
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid scheduled_time: {}", raw)))
}

pub fn parse_scheduled_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Result of a cancel request. A missing appointment is a normal outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    Cancelled(Appointment),
    NotFound,
}

/// Body of `PUT /appointments/{id}/cancel`. Both forms are sent with 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CancelResponse {
    Cancelled { message: String },
    NotFound { error: String },
}

impl From<CancelOutcome> for CancelResponse {
    fn from(outcome: CancelOutcome) -> Self {
        match outcome {
            CancelOutcome::Cancelled(_) => CancelResponse::Cancelled {
                message: "Appointment cancelled".to_string(),
            },
            CancelOutcome::NotFound => CancelResponse::NotFound {
                error: "Appointment not found".to_string(),
            },
        }
    }
}
