//! Canonical record schemas for the portal's collections.
//!
//! One schema per entity — the divergent parallel variants of the source
//! system are reconciled here, with a single status vocabulary each for
//! appointments and lab tests.

pub mod account;
pub mod appointment;
pub mod enums;
pub mod lab_test;
pub mod medical_record;
pub mod notification;
pub mod staff;

pub use account::{Account, NewAccount, RoleProfile};
pub use appointment::{Appointment, AppointmentPatch, NewAppointment};
pub use enums::{AppointmentStatus, LabTestStatus, Role};
pub use lab_test::{LabTest, LabTestPatch, NewLabTest};
pub use medical_record::{MedicalRecord, NewMedicalRecord};
pub use notification::{NewNotification, Notification};
pub use staff::{Doctor, LabTechnician, NewDoctor, NewLabTechnician};
