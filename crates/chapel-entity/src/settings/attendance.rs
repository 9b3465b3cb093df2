//! Attendance form settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Where members record attendance. A single row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AttendanceSettings {
    /// External form link.
    pub google_form_url: Option<String>,
    /// Staff member who last changed it.
    pub updated_by: Option<Uuid>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
