//! Member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::preference::NotificationPreference;
use super::role::MemberRole;

/// A registered congregation member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email, stored trimmed and lower-cased.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Congregation role.
    pub role: MemberRole,
    /// Deactivated members cannot authenticate.
    pub is_active: bool,
    /// Department memberships (e.g. `choir`, `ushering`).
    pub departments: Vec<String>,
    /// Preferred notification channel.
    pub notification_preference: NotificationPreference,
    /// Whether the member agreed to SMS messages.
    pub sms_opt_in: bool,
    /// When the member joined.
    pub join_date: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// `first last`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if this member may use staff routes.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// The externally visible projection, without the password hash.
    pub fn profile(&self) -> MemberProfile {
        MemberProfile::from(self)
    }
}

/// Member data safe to put in a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    /// Member identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Role.
    pub role: MemberRole,
    /// Active flag.
    pub is_active: bool,
    /// Departments.
    pub departments: Vec<String>,
    /// Notification preference.
    pub notification_preference: NotificationPreference,
    /// SMS opt-in.
    pub sms_opt_in: bool,
    /// Join timestamp.
    pub join_date: DateTime<Utc>,
}

impl From<&Member> for MemberProfile {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
            email: m.email.clone(),
            phone: m.phone.clone(),
            role: m.role,
            is_active: m.is_active,
            departments: m.departments.clone(),
            notification_preference: m.notification_preference,
            sms_opt_in: m.sms_opt_in,
            join_date: m.join_date,
        }
    }
}

/// Data required to create a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email; normalized by the store.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: MemberRole,
    /// Initial active flag.
    pub is_active: bool,
    /// Initial departments.
    pub departments: Vec<String>,
    /// Notification preference.
    pub notification_preference: NotificationPreference,
    /// SMS opt-in.
    pub sms_opt_in: bool,
}

/// Partial update of a member. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMember {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email; normalized by the store.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New role.
    pub role: Option<MemberRole>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// Replacement department set.
    pub departments: Option<Vec<String>>,
    /// New notification preference.
    pub notification_preference: Option<NotificationPreference>,
    /// New SMS opt-in.
    pub sms_opt_in: Option<bool>,
}

impl UpdateMember {
    /// Apply this update to an in-memory record.
    pub fn apply_to(self, member: &mut Member) {
        if let Some(v) = self.first_name {
            member.first_name = v;
        }
        if let Some(v) = self.last_name {
            member.last_name = v;
        }
        if let Some(v) = self.email {
            member.email = v;
        }
        if let Some(v) = self.phone {
            member.phone = Some(v);
        }
        if let Some(v) = self.role {
            member.role = v;
        }
        if let Some(v) = self.is_active {
            member.is_active = v;
        }
        if let Some(v) = self.departments {
            member.departments = v;
        }
        if let Some(v) = self.notification_preference {
            member.notification_preference = v;
        }
        if let Some(v) = self.sms_opt_in {
            member.sms_opt_in = v;
        }
    }
}

/// Canonical form of an email address used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
