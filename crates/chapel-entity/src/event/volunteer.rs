//! Volunteer signup records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle of a volunteer signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "volunteer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    /// Awaiting confirmation.
    #[default]
    Pending,
    /// Accepted by staff.
    Confirmed,
    /// Declined by staff.
    Declined,
}

/// A member volunteering for a role at an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VolunteerSignup {
    /// Unique identifier.
    pub id: Uuid,
    /// Event.
    pub event_id: Uuid,
    /// Member.
    pub member_id: Uuid,
    /// Member name at signup time.
    pub member_name: String,
    /// Volunteer role, one of the event's roles.
    pub role: String,
    /// Status.
    pub status: VolunteerStatus,
    /// When the signup was made.
    pub signed_up_at: DateTime<Utc>,
}
