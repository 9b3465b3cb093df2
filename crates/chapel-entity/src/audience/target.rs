//! Audience target tag.

use serde::{Deserialize, Serialize};

/// Who a targeted document is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audience_target", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AudienceTarget {
    /// Everyone.
    #[default]
    All,
    /// Every authenticated member.
    Members,
    /// Members whose role is staff.
    Staff,
    /// Members of at least one listed department.
    Departments,
}

impl AudienceTarget {
    /// The lowercase wire and database name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Members => "members",
            Self::Staff => "staff",
            Self::Departments => "departments",
        }
    }
}
