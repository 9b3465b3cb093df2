//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::audience::{AudienceTarget, Targeted};

/// A scheduled church event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
    /// Venue.
    pub location: String,
    /// Free-form kind, e.g. `service` or `outreach`.
    pub event_type: String,
    /// Drafts are hidden from members.
    pub is_published: bool,
    /// Whether members must RSVP.
    pub registration_required: bool,
    /// RSVP capacity; `None` is unlimited.
    pub max_attendees: Option<i32>,
    /// Whether volunteer signups are open.
    pub volunteers_needed: bool,
    /// Volunteer roles on offer, e.g. `choir`, `usher`.
    pub volunteer_roles: Vec<String>,
    /// Audience tag.
    pub target: AudienceTarget,
    /// Departments addressed when `target` is `departments`.
    pub target_departments: Vec<String>,
    /// Hidden from members from this instant on.
    pub expires_at: Option<DateTime<Utc>>,
    /// Creating member.
    pub created_by: Option<Uuid>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether `count` registrations fill the event.
    pub fn is_full(&self, count: u64) -> bool {
        self.max_attendees
            .is_some_and(|max| count >= u64::try_from(max).unwrap_or(0))
    }

    /// Whether `role` is one of the volunteer roles on offer.
    pub fn offers_role(&self, role: &str) -> bool {
        self.volunteer_roles.iter().any(|r| r == role)
    }
}

impl Targeted for Event {
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

/// Data required to create an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
    /// Venue.
    pub location: String,
    /// Kind.
    pub event_type: String,
    /// Publication flag.
    pub is_published: bool,
    /// RSVP flag.
    pub registration_required: bool,
    /// Capacity.
    pub max_attendees: Option<i32>,
    /// Volunteer flag.
    pub volunteers_needed: bool,
    /// Volunteer roles.
    pub volunteer_roles: Vec<String>,
    /// Audience tag.
    pub target: AudienceTarget,
    /// Target departments.
    pub target_departments: Vec<String>,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Creating member.
    pub created_by: Option<Uuid>,
}

/// Partial update of an event. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New start time.
    pub start_time: Option<DateTime<Utc>>,
    /// New end time.
    pub end_time: Option<DateTime<Utc>>,
    /// New venue.
    pub location: Option<String>,
    /// New kind.
    pub event_type: Option<String>,
    /// New publication flag.
    pub is_published: Option<bool>,
    /// New RSVP flag.
    pub registration_required: Option<bool>,
    /// New capacity.
    pub max_attendees: Option<i32>,
    /// New volunteer flag.
    pub volunteers_needed: Option<bool>,
    /// Replacement volunteer roles.
    pub volunteer_roles: Option<Vec<String>>,
    /// New audience tag.
    pub target: Option<AudienceTarget>,
    /// Replacement target departments.
    pub target_departments: Option<Vec<String>>,
    /// New expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Reset the expiry to "never". Cannot be combined with `expires_at`.
    #[serde(default)]
    pub clear_expiry: bool,
}

impl UpdateEvent {
    /// Apply this update to an in-memory record and bump `updated_at`.
    pub fn apply_to(self, e: &mut Event, now: DateTime<Utc>) {
        if let Some(v) = self.title {
            e.title = v;
        }
        if let Some(v) = self.description {
            e.description = v;
        }
        if let Some(v) = self.start_time {
            e.start_time = v;
        }
        if let Some(v) = self.end_time {
            e.end_time = v;
        }
        if let Some(v) = self.location {
            e.location = v;
        }
        if let Some(v) = self.event_type {
            e.event_type = v;
        }
        if let Some(v) = self.is_published {
            e.is_published = v;
        }
        if let Some(v) = self.registration_required {
            e.registration_required = v;
        }
        if let Some(v) = self.max_attendees {
            e.max_attendees = Some(v);
        }
        if let Some(v) = self.volunteers_needed {
            e.volunteers_needed = v;
        }
        if let Some(v) = self.volunteer_roles {
            e.volunteer_roles = v;
        }
        if let Some(v) = self.target {
            e.target = v;
        }
        if let Some(v) = self.target_departments {
            e.target_departments = v;
        }
        if self.clear_expiry {
            e.expires_at = None;
        } else if let Some(v) = self.expires_at {
            e.expires_at = Some(v);
        }
        e.updated_at = now;
    }
}
