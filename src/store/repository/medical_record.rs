use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{MedicalRecord, NewMedicalRecord};
use crate::store::{RecordStore, StoreError};

pub fn add_medical_record(
    store: &RecordStore,
    patient_id: Uuid,
    doctor_id: Uuid,
    date: NaiveDate,
    diagnosis: impl Into<String>,
    prescription: impl Into<String>,
    notes: impl Into<String>,
) -> Result<MedicalRecord, StoreError> {
    store.create(&NewMedicalRecord {
        patient_id,
        doctor_id,
        date,
        diagnosis: diagnosis.into(),
        prescription: prescription.into(),
        notes: notes.into(),
    })
}

pub fn medical_records_for_patient(
    store: &RecordStore,
    patient_id: Uuid,
) -> Result<Vec<MedicalRecord>, StoreError> {
    store.filter_by("patient_id", patient_id)
}
