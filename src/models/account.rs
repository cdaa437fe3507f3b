use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Role;
use crate::store::Entity;

/// Role-dependent profile fields, tagged by the role itself.
///
/// A closed union instead of optional staff fields on a flat struct:
/// role-specific logic matches exhaustively rather than guarding on ad hoc
/// string comparisons. Serialized internally tagged, so the stored object
/// stays flat (`"role": "doctor", "staff_number": ..., "department": ...`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum RoleProfile {
    #[serde(rename = "patient")]
    Patient,
    #[serde(rename = "doctor")]
    Doctor {
        staff_number: String,
        department: String,
    },
    #[serde(rename = "lab_assistant")]
    LabAssistant {
        staff_number: String,
        department: String,
    },
    #[serde(rename = "nurse")]
    Nurse {
        staff_number: String,
        department: String,
    },
    #[serde(rename = "pharmacist")]
    Pharmacist {
        staff_number: String,
        department: String,
    },
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Patient => Role::Patient,
            RoleProfile::Doctor { .. } => Role::Doctor,
            RoleProfile::LabAssistant { .. } => Role::LabAssistant,
            RoleProfile::Nurse { .. } => Role::Nurse,
            RoleProfile::Pharmacist { .. } => Role::Pharmacist,
        }
    }

    pub fn staff_number(&self) -> Option<&str> {
        match self {
            RoleProfile::Patient => None,
            RoleProfile::Doctor { staff_number, .. }
            | RoleProfile::LabAssistant { staff_number, .. }
            | RoleProfile::Nurse { staff_number, .. }
            | RoleProfile::Pharmacist { staff_number, .. } => Some(staff_number),
        }
    }
}

/// An authenticable identity.
///
/// The password is stored in clear text to keep the demo fixtures of the
/// source system working as-is. Known design flaw: a production deployment
/// must store a salted hash and compare against that instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub surname: String,
    pub age: u32,
    pub gender: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

impl Entity for Account {
    const COLLECTION: &'static str = "accounts";
    type Draft = NewAccount;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Creation payload for an account; the store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub surname: String,
    pub age: u32,
    pub gender: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Self-service registration defaults to the patient role.
    pub fn patient(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            surname: surname.into(),
            age,
            gender: gender.into(),
            profile: RoleProfile::Patient,
            created_at: Utc::now(),
        }
    }

    /// Staff registration carries an explicit role profile.
    pub fn staff(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        profile: RoleProfile,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            surname: surname.into(),
            age,
            gender: gender.into(),
            profile,
            created_at: Utc::now(),
        }
    }
}
