//! Request context carrying the resolved member.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use chapel_core::error::AppError;
use chapel_entity::audience::Viewer;
use chapel_entity::member::Member;

/// Context for the current authenticated request.
///
/// Built by the API extractors after the bearer token resolves and passed
/// into service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The member as loaded for this request.
    pub member: Member,
    /// When the request was received. Audience checks use this as `now`.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context stamped with the current time.
    pub fn new(member: Member) -> Self {
        Self {
            member,
            request_time: Utc::now(),
        }
    }

    /// The acting member's id.
    pub fn member_id(&self) -> Uuid {
        self.member.id
    }

    /// The audience viewer for the acting member.
    pub fn viewer(&self) -> Viewer {
        Viewer::from(&self.member)
    }

    /// Fails with `Forbidden` unless the member is Admin or Staff.
    pub fn require_staff(&self) -> Result<&Member, AppError> {
        chapel_auth::require_staff(&self.member)
    }
}
