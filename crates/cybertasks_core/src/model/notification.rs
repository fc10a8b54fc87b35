//! Notification domain model.
//!
//! Notifications are read-only feed entries seeded into the store; no
//! mutation operations exist for them in this core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every notification.
pub type NotificationId = Uuid;

/// Feed entry category, used only to pick an accent in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// A due date is near or has passed.
    Deadline,
    /// Something on the board changed.
    Change,
}

/// Transient status message shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Free-text message body.
    pub message: String,
    /// Relative display string ("10 min ago"), not a real timestamp.
    pub time: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            time: time.into(),
        }
    }
}
