//! Session-based authentication shim, layered over the record store.
//!
//! Sessions live under their own key in the same key-value table as the
//! collections and expire 24 hours after sign-in. Passwords are compared by
//! exact plaintext match — a deliberate carry-over from the source system's
//! demo contract, and a known flaw: any production deployment must switch
//! to a salted-hash comparison.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing;

use crate::config;
use crate::models::{Account, NewAccount};
use crate::store::repository::find_account_by_email;
use crate::store::{kv, RecordStore, StoreError};

const SESSION_KEY: &str = "session";

/// Ephemeral proof of authentication: the signed-in account plus expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: Account,
    pub expires_at: DateTime<Utc>,
}

/// Expected, recoverable conditions of the auth flows. Storage failures
/// pass through as `Store` and are treated as fatal to the operation.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("An account with email {0} already exists")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No active session")]
    NoSession,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Register a new account. Fails with `EmailTaken` before anything is
/// written, so a rejected sign-up never mutates the collection.
pub fn sign_up(store: &RecordStore, draft: NewAccount) -> Result<Account, AuthError> {
    if find_account_by_email(store, &draft.email)?.is_some() {
        return Err(AuthError::EmailTaken(draft.email));
    }
    let account = store.create::<Account>(&draft)?;
    tracing::info!(role = account.role().as_str(), "Account created");
    Ok(account)
}

/// Sign in with email and password; on success the session is written with
/// a 24-hour expiry.
pub fn sign_in(store: &RecordStore, email: &str, password: &str) -> Result<Session, AuthError> {
    sign_in_at(store, email, password, Utc::now())
}

pub fn sign_in_at(
    store: &RecordStore,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<Session, AuthError> {
    let Some(account) = find_account_by_email(store, email)? else {
        return Err(AuthError::InvalidCredentials);
    };
    // Plaintext equality — see the module-level caveat.
    if account.password != password {
        tracing::warn!("Rejected sign-in attempt");
        return Err(AuthError::InvalidCredentials);
    }

    let session = Session {
        user: account,
        expires_at: now + Duration::hours(config::SESSION_TTL_HOURS),
    };
    let payload = serde_json::to_string(&session).map_err(StoreError::from)?;
    kv::write_key(store.conn(), SESSION_KEY, &payload)?;
    tracing::info!(role = session.user.role().as_str(), "Signed in");
    Ok(session)
}

/// The currently authenticated account, or `NoSession` if none exists or
/// the session has expired.
pub fn current_user(store: &RecordStore) -> Result<Account, AuthError> {
    current_user_at(store, Utc::now())
}

pub fn current_user_at(store: &RecordStore, now: DateTime<Utc>) -> Result<Account, AuthError> {
    let Some(payload) = kv::read_key(store.conn(), SESSION_KEY)? else {
        return Err(AuthError::NoSession);
    };
    let session: Session = serde_json::from_str(&payload).map_err(StoreError::from)?;
    if now >= session.expires_at {
        return Err(AuthError::NoSession);
    }
    Ok(session.user)
}

/// Clear the session unconditionally. Idempotent.
pub fn sign_out(store: &RecordStore) -> Result<(), AuthError> {
    kv::delete_key(store.conn(), SESSION_KEY)?;
    tracing::debug!("Signed out");
    Ok(())
}
