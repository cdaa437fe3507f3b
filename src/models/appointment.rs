use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;
use crate::store::Entity;

/// A patient's booking with a doctor. Created by a patient action, status
/// moved by doctor/staff action, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    /// HH:MM, kept as entered.
    pub time: String,
    pub status: AppointmentStatus,
    /// Visit type, free text ("Check-up", "Follow-up", ...).
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Appointment {
    const COLLECTION: &'static str = "appointments";
    type Draft = NewAppointment;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update: absent fields are preserved as stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
