//! Comment value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment appended to a prayer request or testimony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: Uuid,
    /// Author.
    pub member_id: Uuid,
    /// Body.
    pub text: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// New comment by `member_id`, stamped now.
    pub fn new(member_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
