use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::LabTestStatus;
use crate::store::Entity;

/// A test ordered by a doctor against an appointment; a lab technician
/// moves it to completed (with results) or cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub test_type: String,
    pub description: String,
    pub status: LabTestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for LabTest {
    const COLLECTION: &'static str = "lab_tests";
    type Draft = NewLabTest;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLabTest {
    pub appointment_id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub test_type: String,
    pub description: String,
    pub status: LabTestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LabTestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LabTestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
}
