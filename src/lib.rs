//! NeemaMed — record store and session layer for a multi-role medical
//! portal (patients, doctors, lab technicians, staff).
//!
//! The crate's core is the [`store::RecordStore`]: named, insertion-ordered
//! JSON collections over a single SQLite key-value table, with a thin
//! relational-style query surface ([`store::repository`]) and a
//! session-based authentication shim ([`auth`]) on top. UI layers consume
//! these and render the results; nothing here renders or routes.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod seed;
pub mod store;

pub use auth::{AuthError, Session};
pub use store::{Entity, RecordStore, StoreError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the store. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
