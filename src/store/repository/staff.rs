use chrono::Utc;

use crate::models::{Doctor, LabTechnician, NewDoctor, NewLabTechnician};
use crate::store::{RecordStore, StoreError};

pub fn register_doctor(
    store: &RecordStore,
    staff_number: impl Into<String>,
    name: impl Into<String>,
    specialization: impl Into<String>,
) -> Result<Doctor, StoreError> {
    store.create(&NewDoctor {
        staff_number: staff_number.into(),
        name: name.into(),
        specialization: specialization.into(),
        created_at: Utc::now(),
    })
}

pub fn register_lab_technician(
    store: &RecordStore,
    staff_number: impl Into<String>,
    name: impl Into<String>,
) -> Result<LabTechnician, StoreError> {
    store.create(&NewLabTechnician {
        staff_number: staff_number.into(),
        name: name.into(),
        created_at: Utc::now(),
    })
}

pub fn all_doctors(store: &RecordStore) -> Result<Vec<Doctor>, StoreError> {
    store.list()
}

pub fn all_lab_technicians(store: &RecordStore) -> Result<Vec<LabTechnician>, StoreError> {
    store.list()
}

/// Staff-number lookup backing the employee sign-in screen.
pub fn find_doctor_by_staff_number(
    store: &RecordStore,
    staff_number: &str,
) -> Result<Option<Doctor>, StoreError> {
    let matches: Vec<Doctor> = store.filter_by("staff_number", staff_number)?;
    Ok(matches.into_iter().next())
}

pub fn find_lab_technician_by_staff_number(
    store: &RecordStore,
    staff_number: &str,
) -> Result<Option<LabTechnician>, StoreError> {
    let matches: Vec<LabTechnician> = store.filter_by("staff_number", staff_number)?;
    Ok(matches.into_iter().next())
}
