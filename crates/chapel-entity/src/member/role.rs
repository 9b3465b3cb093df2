//! Member role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of congregation roles.
///
/// There is no privilege ordering between roles; permission checks test set
/// membership against an explicit allow-list such as [`MemberRole::STAFF`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role")]
pub enum MemberRole {
    /// Regular congregation member.
    #[default]
    Member,
    /// Usher team.
    Usher,
    /// Choir.
    Choir,
    /// Deacon.
    Deacon,
    /// Church staff.
    Staff,
    /// Administrator.
    Admin,
}

impl MemberRole {
    /// Every role, in catalogue order.
    pub const ALL: [MemberRole; 6] = [
        Self::Member,
        Self::Usher,
        Self::Choir,
        Self::Deacon,
        Self::Staff,
        Self::Admin,
    ];

    /// Roles allowed onto administrative routes and into staff-targeted content.
    pub const STAFF: [MemberRole; 2] = [Self::Admin, Self::Staff];

    /// Whether this role is in [`MemberRole::STAFF`].
    pub fn is_staff(&self) -> bool {
        Self::STAFF.contains(self)
    }

    /// Return the role's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Usher => "Usher",
            Self::Choir => "Choir",
            Self::Deacon => "Deacon",
            Self::Staff => "Staff",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = chapel_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                chapel_core::AppError::validation(format!(
                    "Invalid role: '{s}'. Expected one of: Member, Usher, Choir, Deacon, Staff, Admin"
                ))
            })
    }
}
