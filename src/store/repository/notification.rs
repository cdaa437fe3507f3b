use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{NewNotification, Notification};
use crate::store::{RecordStore, StoreError};

/// One-field patch for the read flag; the only update notifications get.
#[derive(Serialize)]
struct ReadPatch {
    read: bool,
}

pub fn push_notification(
    store: &RecordStore,
    user_id: Uuid,
    title: impl Into<String>,
    message: impl Into<String>,
) -> Result<Notification, StoreError> {
    store.create(&NewNotification {
        user_id,
        title: title.into(),
        message: message.into(),
        date: Utc::now(),
        read: false,
    })
}

pub fn notifications_for_user(
    store: &RecordStore,
    user_id: Uuid,
) -> Result<Vec<Notification>, StoreError> {
    store.filter_by("user_id", user_id)
}

pub fn unread_count(store: &RecordStore, user_id: Uuid) -> Result<usize, StoreError> {
    Ok(notifications_for_user(store, user_id)?
        .iter()
        .filter(|n| !n.read)
        .count())
}

/// Mark a notification read. One-directional and idempotent: a second call
/// on an already-read notification leaves it read and does not error.
pub fn mark_as_read(store: &RecordStore, id: Uuid) -> Result<Notification, StoreError> {
    store.update(id, &ReadPatch { read: true })
}
