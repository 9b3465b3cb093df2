//! The member attributes the audience predicate reads.

use serde::{Deserialize, Serialize};

use crate::member::{Member, MemberRole};

/// The subject an audience predicate is evaluated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// The viewer's role.
    pub role: MemberRole,
    /// The viewer's departments.
    pub departments: Vec<String>,
}

impl Viewer {
    /// Build a viewer from raw attributes.
    pub fn new(role: MemberRole, departments: Vec<String>) -> Self {
        Self { role, departments }
    }

    /// Whether staff-targeted documents are visible to this viewer.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// Whether any of `targets` is one of the viewer's departments.
    pub fn shares_department(&self, targets: &[String]) -> bool {
        targets.iter().any(|t| self.departments.contains(t))
    }
}

impl From<&Member> for Viewer {
    fn from(member: &Member) -> Self {
        Self::new(member.role, member.departments.clone())
    }
}
