//! Read models for the role dashboards, plus the optimistic appointment
//! board.
//!
//! Joins here are in-memory lookups against the accounts collection and may
//! legitimately miss: foreign keys are validated at creation time only, so
//! a missing reference degrades to an "Unknown" placeholder instead of
//! failing the whole view.

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Account, Appointment, AppointmentStatus, LabTest, RoleProfile};
use crate::store::repository::{appointments_for_doctor, update_appointment_status};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Clone, Serialize)]
pub struct PatientSummary {
    pub id: Option<Uuid>,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl PatientSummary {
    fn from_account(account: &Account) -> Self {
        Self {
            id: Some(account.id),
            name: account.full_name(),
            age: account.age,
            gender: account.gender.clone(),
        }
    }

    fn unknown() -> Self {
        Self {
            id: None,
            name: "Unknown Patient".to_string(),
            age: 0,
            gender: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorSummary {
    pub id: Option<Uuid>,
    pub name: String,
    pub staff_number: String,
    pub department: String,
}

impl DoctorSummary {
    fn from_account(account: &Account) -> Self {
        let (staff_number, department) = match &account.profile {
            RoleProfile::Doctor {
                staff_number,
                department,
            } => (staff_number.clone(), department.clone()),
            _ => (String::new(), String::new()),
        };
        Self {
            id: Some(account.id),
            name: account.full_name(),
            staff_number,
            department,
        }
    }

    fn unknown() -> Self {
        Self {
            id: None,
            name: "Unknown Doctor".to_string(),
            staff_number: String::new(),
            department: String::new(),
        }
    }
}

/// A lab test joined with its patient and ordering doctor, for the lab
/// technician's work queue.
#[derive(Debug, Clone, Serialize)]
pub struct LabTestDetail {
    pub test: LabTest,
    pub patient: PatientSummary,
    pub doctor: DoctorSummary,
}

/// All lab tests with joined details, newest first.
pub fn lab_test_details(store: &RecordStore) -> Result<Vec<LabTestDetail>, StoreError> {
    let accounts: Vec<Account> = store.list()?;
    let mut tests: Vec<LabTest> = store.list()?;
    tests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(tests
        .into_iter()
        .map(|test| {
            let patient = accounts
                .iter()
                .find(|a| a.id == test.patient_id)
                .map(PatientSummary::from_account)
                .unwrap_or_else(PatientSummary::unknown);
            let doctor = accounts
                .iter()
                .find(|a| a.id == test.doctor_id)
                .map(DoctorSummary::from_account)
                .unwrap_or_else(DoctorSummary::unknown);
            LabTestDetail {
                test,
                patient,
                doctor,
            }
        })
        .collect())
}

/// An appointment joined with its patient, for the doctor's list.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub patient: PatientSummary,
}

/// A doctor's appointments with patient details, soonest first.
pub fn appointment_details_for_doctor(
    store: &RecordStore,
    doctor_id: Uuid,
) -> Result<Vec<AppointmentDetail>, StoreError> {
    let accounts: Vec<Account> = store.list()?;
    let mut appointments = appointments_for_doctor(store, doctor_id)?;
    appointments.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));

    Ok(appointments
        .into_iter()
        .map(|appointment| {
            let patient = accounts
                .iter()
                .find(|a| a.id == appointment.patient_id)
                .map(PatientSummary::from_account)
                .unwrap_or_else(PatientSummary::unknown);
            AppointmentDetail {
                appointment,
                patient,
            }
        })
        .collect())
}

/// A doctor's local view of their appointments with optimistic status
/// changes.
///
/// Two-phase: the change is applied to the local view immediately, then the
/// store mutation is issued. On failure the view is re-fetched from the
/// store, so the speculative value never outlives a failed write.
pub struct AppointmentBoard {
    doctor_id: Uuid,
    appointments: Vec<Appointment>,
}

impl AppointmentBoard {
    pub fn load(store: &RecordStore, doctor_id: Uuid) -> Result<Self, StoreError> {
        Ok(Self {
            doctor_id,
            appointments: appointments_for_doctor(store, doctor_id)?,
        })
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Change an appointment's status, optimistically.
    pub fn set_status(
        &mut self,
        store: &RecordStore,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), StoreError> {
        if let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) {
            appointment.status = status;
        }

        match update_appointment_status(store, id, status) {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!(%id, "Status update failed, reloading authoritative state");
                self.appointments = appointments_for_doctor(store, self.doctor_id)?;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sign_up;
    use crate::models::{LabTestStatus, NewAccount, NewLabTest};
    use crate::store::repository::{book_appointment, order_lab_test};
    use chrono::{Duration, NaiveDate, Utc};

    fn test_store() -> RecordStore {
        RecordStore::open_in_memory().unwrap()
    }

    fn patient(store: &RecordStore, email: &str, first: &str) -> Account {
        sign_up(
            store,
            NewAccount::patient(email, "pw", first, "Mwangi", 30, "female"),
        )
        .unwrap()
    }

    fn doctor(store: &RecordStore) -> Account {
        sign_up(
            store,
            NewAccount::staff(
                "doc@x.com",
                "pw",
                "Sarah",
                "Johnson",
                35,
                "female",
                RoleProfile::Doctor {
                    staff_number: "DOC123".into(),
                    department: "General Practice".into(),
                },
            ),
        )
        .unwrap()
    }

    #[test]
    fn lab_details_join_known_accounts() {
        let store = test_store();
        let pat = patient(&store, "p@x.com", "Aisha");
        let doc = doctor(&store);
        order_lab_test(&store, Uuid::new_v4(), doc.id, pat.id, "Blood panel", "FBC").unwrap();

        let details = lab_test_details(&store).unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].patient.name, "Aisha Mwangi");
        assert_eq!(details[0].doctor.name, "Sarah Johnson");
        assert_eq!(details[0].doctor.staff_number, "DOC123");
    }

    #[test]
    fn missing_references_degrade_to_unknown() {
        let store = test_store();
        order_lab_test(
            &store,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "X-ray",
            "Chest",
        )
        .unwrap();

        let details = lab_test_details(&store).unwrap();
        assert_eq!(details[0].patient.name, "Unknown Patient");
        assert!(details[0].patient.id.is_none());
        assert_eq!(details[0].doctor.name, "Unknown Doctor");
    }

    #[test]
    fn lab_details_sorted_newest_first() {
        let store = test_store();
        let base = Utc::now();
        for (i, label) in ["old", "mid", "new"].iter().enumerate() {
            store
                .create::<LabTest>(&NewLabTest {
                    appointment_id: Uuid::new_v4(),
                    doctor_id: Uuid::new_v4(),
                    patient_id: Uuid::new_v4(),
                    test_type: label.to_string(),
                    description: String::new(),
                    status: LabTestStatus::Pending,
                    results: None,
                    created_at: base + Duration::minutes(i as i64),
                })
                .unwrap();
        }

        let details = lab_test_details(&store).unwrap();
        let order: Vec<&str> = details.iter().map(|d| d.test.test_type.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old"]);
    }

    #[test]
    fn doctor_view_sorted_by_date_and_time() {
        let store = test_store();
        let pat = patient(&store, "p@x.com", "Aisha");
        let doc = doctor(&store);
        let d = |day| NaiveDate::from_ymd_opt(2025, 7, day).unwrap();

        book_appointment(&store, pat.id, doc.id, d(2), "09:00", "Check-up", None).unwrap();
        book_appointment(&store, pat.id, doc.id, d(1), "14:00", "Check-up", None).unwrap();
        book_appointment(&store, pat.id, doc.id, d(1), "08:00", "Check-up", None).unwrap();

        let details = appointment_details_for_doctor(&store, doc.id).unwrap();
        let order: Vec<(NaiveDate, &str)> = details
            .iter()
            .map(|x| (x.appointment.date, x.appointment.time.as_str()))
            .collect();
        assert_eq!(order, vec![(d(1), "08:00"), (d(1), "14:00"), (d(2), "09:00")]);
        assert_eq!(details[0].patient.name, "Aisha Mwangi");
    }

    #[test]
    fn optimistic_status_change_confirms_on_success() {
        let store = test_store();
        let pat = patient(&store, "p@x.com", "Aisha");
        let doc = doctor(&store);
        let appt = book_appointment(
            &store,
            pat.id,
            doc.id,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            "09:00",
            "Check-up",
            None,
        )
        .unwrap();

        let mut board = AppointmentBoard::load(&store, doc.id).unwrap();
        board
            .set_status(&store, appt.id, AppointmentStatus::Completed)
            .unwrap();

        assert_eq!(board.appointments()[0].status, AppointmentStatus::Completed);
        let stored: Appointment = store.get(appt.id).unwrap().unwrap();
        assert_eq!(stored.status, AppointmentStatus::Completed);
    }

    #[test]
    fn failed_status_change_rolls_back_to_authoritative_state() {
        let store = test_store();
        let pat = patient(&store, "p@x.com", "Aisha");
        let doc = doctor(&store);
        let appt = book_appointment(
            &store,
            pat.id,
            doc.id,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            "09:00",
            "Check-up",
            None,
        )
        .unwrap();

        let mut board = AppointmentBoard::load(&store, doc.id).unwrap();
        // The record disappears underneath the board's local view
        store.delete::<Appointment>(appt.id).unwrap();

        let err = board
            .set_status(&store, appt.id, AppointmentStatus::Completed)
            .unwrap_err();
        assert!(err.is_not_found());

        // The speculative value is gone; the board matches the store again
        assert!(board.appointments().is_empty());
    }
}
