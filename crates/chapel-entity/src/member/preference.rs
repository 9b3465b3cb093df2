//! Notification channel preference.

use serde::{Deserialize, Serialize};

/// How a member wants to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_preference", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationPreference {
    /// Email only.
    Email,
    /// SMS only.
    Sms,
    /// Email and SMS.
    #[default]
    Both,
}
