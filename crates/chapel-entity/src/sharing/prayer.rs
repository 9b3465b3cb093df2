//! Prayer request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::comment::Comment;

/// A prayer request submitted by a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PrayerRequest {
    /// Unique identifier.
    pub id: Uuid,
    /// Submitting member.
    pub member_id: Uuid,
    /// Request text.
    pub content: String,
    /// Whether the submitter wants it on the public wall.
    pub is_public: bool,
    /// Set by staff moderation.
    pub is_approved: bool,
    /// How many times members have prayed for it.
    pub prayer_count: i64,
    /// Comment thread, stored as a JSON array.
    #[sqlx(json)]
    pub comments: Vec<Comment>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl PrayerRequest {
    /// Visible on the public wall.
    pub fn is_listed(&self) -> bool {
        self.is_public && self.is_approved
    }

    /// Whether `member_id` may pray for or comment on this request.
    pub fn is_reachable_by(&self, member_id: Uuid) -> bool {
        self.is_listed() || self.member_id == member_id
    }
}
