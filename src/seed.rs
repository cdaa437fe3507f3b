//! First-run demo fixtures.
//!
//! The store itself is self-initializing (an unwritten collection reads as
//! empty), so seeding only provisions the demo accounts and the staff
//! directory the portal ships with. Runs at most once: a store with any
//! accounts is left alone.

use tracing;

use crate::models::{NewAccount, RoleProfile};
use crate::store::repository::{insert_account, register_doctor, register_lab_technician};
use crate::store::{RecordStore, StoreError};

/// Seed demo accounts and staff directory entries. Returns whether
/// anything was written; re-running against a populated store is a no-op.
pub fn seed_demo_data(store: &RecordStore) -> Result<bool, StoreError> {
    if !store.list::<crate::models::Account>()?.is_empty() {
        return Ok(false);
    }

    tracing::info!("Seeding demo data");

    insert_account(
        store,
        &NewAccount::patient("demo@example.com", "demo123", "Demo", "User", 30, "male"),
    )?;
    insert_account(
        store,
        &NewAccount::staff(
            "doctor@example.com",
            "doctor123",
            "Sarah",
            "Johnson",
            35,
            "female",
            RoleProfile::Doctor {
                staff_number: "DOC123".to_string(),
                department: "General Practice".to_string(),
            },
        ),
    )?;
    insert_account(
        store,
        &NewAccount::staff(
            "lab@example.com",
            "lab123",
            "Michael",
            "Chen",
            40,
            "male",
            RoleProfile::LabAssistant {
                staff_number: "LAB456".to_string(),
                department: "Laboratory".to_string(),
            },
        ),
    )?;

    register_doctor(store, "DOC123", "Dr. Sarah Johnson", "General Practice")?;
    register_lab_technician(store, "LAB456", "Michael Chen")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sign_in;
    use crate::models::{Account, Doctor, LabTechnician, Role};

    #[test]
    fn seeding_provisions_demo_fixtures() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(seed_demo_data(&store).unwrap());

        let accounts: Vec<Account> = store.list().unwrap();
        assert_eq!(accounts.len(), 3);
        assert_eq!(store.list::<Doctor>().unwrap().len(), 1);
        assert_eq!(store.list::<LabTechnician>().unwrap().len(), 1);

        // The shipped demo credentials work
        let session = sign_in(&store, "demo@example.com", "demo123").unwrap();
        assert_eq!(session.user.role(), Role::Patient);
        let session = sign_in(&store, "doctor@example.com", "doctor123").unwrap();
        assert_eq!(session.user.role(), Role::Doctor);
        let session = sign_in(&store, "lab@example.com", "lab123").unwrap();
        assert_eq!(session.user.role(), Role::LabAssistant);
    }

    #[test]
    fn seeding_twice_is_a_noop() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(seed_demo_data(&store).unwrap());
        assert!(!seed_demo_data(&store).unwrap());

        let accounts: Vec<Account> = store.list().unwrap();
        assert_eq!(accounts.len(), 3);
    }

    #[test]
    fn populated_store_is_never_reseeded() {
        let store = RecordStore::open_in_memory().unwrap();
        insert_account(
            &store,
            &NewAccount::patient("real@x.com", "pw", "Real", "Person", 50, "female"),
        )
        .unwrap();

        assert!(!seed_demo_data(&store).unwrap());
        let accounts: Vec<Account> = store.list().unwrap();
        assert_eq!(accounts.len(), 1);
    }
}
