use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Entity;

/// A visit summary written by a doctor for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

impl Entity for MedicalRecord {
    const COLLECTION: &'static str = "medical_records";
    type Draft = NewMedicalRecord;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMedicalRecord {
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}
