use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde representation matches the stored string, since JSON in the
/// collection payloads is the persistence format.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Role {
    Patient => "patient",
    Doctor => "doctor",
    LabAssistant => "lab_assistant",
    Nurse => "nurse",
    Pharmacist => "pharmacist",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(LabTestStatus {
    Pending => "pending",
    Completed => "completed",
    Cancelled => "cancelled",
});

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn role_round_trip() {
        for (variant, s) in [
            (Role::Patient, "patient"),
            (Role::Doctor, "doctor"),
            (Role::LabAssistant, "lab_assistant"),
            (Role::Nurse, "nurse"),
            (Role::Pharmacist, "pharmacist"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Role::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_value_rejected() {
        let err = AppointmentStatus::from_str("accepted").unwrap_err();
        assert!(matches!(err, StoreError::InvalidEnum { .. }));
    }

    #[test]
    fn serde_uses_stored_strings() {
        let json = serde_json::to_string(&Role::LabAssistant).unwrap();
        assert_eq!(json, "\"lab_assistant\"");
        let back: LabTestStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(back, LabTestStatus::Pending);
    }
}
