//! RSVP records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle of an RSVP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "registration_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Signed up.
    #[default]
    Registered,
    /// Checked in.
    Attended,
    /// Withdrawn.
    Cancelled,
}

/// A member's RSVP to an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventRegistration {
    /// Unique identifier.
    pub id: Uuid,
    /// Event.
    pub event_id: Uuid,
    /// Member.
    pub member_id: Uuid,
    /// Member name at signup time.
    pub member_name: String,
    /// Status.
    pub status: RegistrationStatus,
    /// When the RSVP was made.
    pub registered_at: DateTime<Utc>,
}
