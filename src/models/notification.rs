use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Entity;

/// A message for one user. `read` moves false → true exactly once and is
/// the only mutation notifications ever see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

impl Entity for Notification {
    const COLLECTION: &'static str = "notifications";
    type Draft = NewNotification;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}
