use crate::models::{Account, NewAccount, Role};
use crate::store::{RecordStore, StoreError};

/// Look up an account by email. Emails are unique within the collection
/// (enforced at sign-up), so the first match is the only match.
pub fn find_account_by_email(
    store: &RecordStore,
    email: &str,
) -> Result<Option<Account>, StoreError> {
    let matches: Vec<Account> = store.filter_by("email", email)?;
    Ok(matches.into_iter().next())
}

pub fn accounts_with_role(store: &RecordStore, role: Role) -> Result<Vec<Account>, StoreError> {
    store.filter_by("role", role)
}

/// Insert an account without the uniqueness check. Callers that take user
/// input go through `auth::sign_up` instead.
pub(crate) fn insert_account(
    store: &RecordStore,
    draft: &NewAccount,
) -> Result<Account, StoreError> {
    store.create(draft)
}
