use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{Appointment, AppointmentPatch, AppointmentStatus, NewAppointment};
use crate::store::{RecordStore, StoreError};

/// Book a new appointment for a patient. New bookings always start
/// scheduled; status moves only through [`update_appointment_status`].
pub fn book_appointment(
    store: &RecordStore,
    patient_id: Uuid,
    doctor_id: Uuid,
    date: NaiveDate,
    time: impl Into<String>,
    kind: impl Into<String>,
    notes: Option<String>,
) -> Result<Appointment, StoreError> {
    store.create(&NewAppointment {
        patient_id,
        doctor_id,
        date,
        time: time.into(),
        status: AppointmentStatus::Scheduled,
        kind: kind.into(),
        notes,
        created_at: Utc::now(),
    })
}

pub fn appointments_for_patient(
    store: &RecordStore,
    patient_id: Uuid,
) -> Result<Vec<Appointment>, StoreError> {
    store.filter_by("patient_id", patient_id)
}

pub fn appointments_for_doctor(
    store: &RecordStore,
    doctor_id: Uuid,
) -> Result<Vec<Appointment>, StoreError> {
    store.filter_by("doctor_id", doctor_id)
}

/// Status transition, a first-class operation in the portal (the doctor
/// dashboard's accept/complete/cancel buttons all land here).
pub fn update_appointment_status(
    store: &RecordStore,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<Appointment, StoreError> {
    store.update(
        id,
        &AppointmentPatch {
            status: Some(status),
            ..Default::default()
        },
    )
}

pub fn set_appointment_notes(
    store: &RecordStore,
    id: Uuid,
    notes: impl Into<String>,
) -> Result<Appointment, StoreError> {
    store.update(
        id,
        &AppointmentPatch {
            notes: Some(notes.into()),
            ..Default::default()
        },
    )
}
