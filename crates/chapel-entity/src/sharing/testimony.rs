//! Testimony entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::comment::Comment;

/// A testimony shared by a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimony {
    /// Unique identifier.
    pub id: Uuid,
    /// Submitting member.
    pub member_id: Uuid,
    /// Testimony text.
    pub content: String,
    /// Set by staff moderation.
    pub is_approved: bool,
    /// Comment thread, stored as a JSON array.
    #[sqlx(json)]
    pub comments: Vec<Comment>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Testimony {
    /// Whether `member_id` may comment on this testimony.
    pub fn is_reachable_by(&self, member_id: Uuid) -> bool {
        self.is_approved || self.member_id == member_id
    }
}

/// A staff moderation decision on a testimony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ModerationAction {
    /// Publish it.
    Approve,
    /// Withdraw approval.
    Reject,
    /// Replace the content.
    Edit {
        /// New content.
        content: String,
    },
}

impl ModerationAction {
    /// Short label for logs and response messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Edit { .. } => "edit",
        }
    }
}
