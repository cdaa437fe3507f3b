//! Staff directory entries — the records the portal shows when picking a
//! doctor or routing a lab test, separate from the staff member's own
//! sign-in account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub staff_number: String,
    pub name: String,
    pub specialization: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Doctor {
    const COLLECTION: &'static str = "doctors";
    type Draft = NewDoctor;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewDoctor {
    pub staff_number: String,
    pub name: String,
    pub specialization: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTechnician {
    pub id: Uuid,
    pub staff_number: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for LabTechnician {
    const COLLECTION: &'static str = "lab_technicians";
    type Draft = NewLabTechnician;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewLabTechnician {
    pub staff_number: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
