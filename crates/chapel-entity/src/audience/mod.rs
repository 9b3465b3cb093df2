//! Audience targeting shared by announcements and events.
//!
//! A targeted document is visible to a viewer iff it is published, it has
//! not expired, and the viewer satisfies its [`AudienceTarget`]. The checks
//! run in that order and stop at the first failure.

pub mod target;
pub mod viewer;

use chrono::{DateTime, Utc};

pub use target::AudienceTarget;
pub use viewer::Viewer;

/// Why a targeted document is hidden from a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hidden {
    /// The document is a draft.
    Unpublished,
    /// The document's expiry is at or before `now`.
    Expired,
    /// The viewer is outside the target audience.
    OutsideAudience,
}

/// A document carrying publication, expiry and audience fields.
pub trait Targeted {
    /// Publication flag.
    fn is_published(&self) -> bool;

    /// Optional expiry instant.
    fn expires_at(&self) -> Option<DateTime<Utc>>;

    /// Audience tag.
    fn target(&self) -> AudienceTarget;

    /// Departments consulted when the target is [`AudienceTarget::Departments`].
    fn target_departments(&self) -> &[String];

    /// Evaluate the audience predicate for `viewer` at `now`.
    fn visibility(&self, viewer: &Viewer, now: DateTime<Utc>) -> Result<(), Hidden> {
        if !self.is_published() {
            return Err(Hidden::Unpublished);
        }
        if self.expires_at().is_some_and(|exp| exp <= now) {
            return Err(Hidden::Expired);
        }
        let admitted = match self.target() {
            AudienceTarget::All | AudienceTarget::Members => true,
            AudienceTarget::Staff => viewer.is_staff(),
            AudienceTarget::Departments => viewer.shares_department(self.target_departments()),
        };
        if admitted {
            Ok(())
        } else {
            Err(Hidden::OutsideAudience)
        }
    }

    /// Shorthand for [`Targeted::visibility`] as a boolean.
    fn is_visible_to(&self, viewer: &Viewer, now: DateTime<Utc>) -> bool {
        self.visibility(viewer, now).is_ok()
    }
}
