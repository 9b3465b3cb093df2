//! Announcement priority levels.

use serde::{Deserialize, Serialize};

/// How prominently an announcement is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "announcement_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementPriority {
    /// Low.
    Low,
    /// Normal.
    #[default]
    Normal,
    /// High.
    High,
    /// Urgent.
    Urgent,
}
