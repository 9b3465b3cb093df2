//! Announcement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::priority::AnnouncementPriority;
use crate::audience::{AudienceTarget, Targeted};

/// A church announcement addressed to an audience.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Unique identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Member who created the announcement.
    pub author_id: Option<Uuid>,
    /// Priority.
    pub priority: AnnouncementPriority,
    /// Audience tag.
    pub target: AudienceTarget,
    /// Departments addressed when `target` is `departments`.
    pub target_departments: Vec<String>,
    /// Drafts are hidden from every member-facing listing.
    pub is_published: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// Hidden from members from this instant on.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Targeted for Announcement {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    fn target(&self) -> AudienceTarget {
        self.target
    }

    fn target_departments(&self) -> &[String] {
        &self.target_departments
    }
}

/// Data required to create an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnouncement {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Creating member.
    pub author_id: Option<Uuid>,
    /// Priority.
    pub priority: AnnouncementPriority,
    /// Audience tag.
    pub target: AudienceTarget,
    /// Target departments.
    pub target_departments: Vec<String>,
    /// Publication flag.
    pub is_published: bool,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial update of an announcement. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnnouncement {
    /// New headline.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New priority.
    pub priority: Option<AnnouncementPriority>,
    /// New audience tag.
    pub target: Option<AudienceTarget>,
    /// Replacement target departments.
    pub target_departments: Option<Vec<String>>,
    /// New publication flag.
    pub is_published: Option<bool>,
    /// New expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Reset the expiry to "never". Cannot be combined with `expires_at`.
    #[serde(default)]
    pub clear_expiry: bool,
}

impl UpdateAnnouncement {
    /// Apply this update to an in-memory record and bump `updated_at`.
    pub fn apply_to(self, a: &mut Announcement, now: DateTime<Utc>) {
        if let Some(v) = self.title {
            a.title = v;
        }
        if let Some(v) = self.content {
            a.content = v;
        }
        if let Some(v) = self.priority {
            a.priority = v;
        }
        if let Some(v) = self.target {
            a.target = v;
        }
        if let Some(v) = self.target_departments {
            a.target_departments = v;
        }
        if let Some(v) = self.is_published {
            a.is_published = v;
        }
        if self.clear_expiry {
            a.expires_at = None;
        } else if let Some(v) = self.expires_at {
            a.expires_at = Some(v);
        }
        a.updated_at = now;
    }
}
