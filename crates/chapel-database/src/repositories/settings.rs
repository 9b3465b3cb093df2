//! Settings repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_entity::settings::AttendanceSettings;

use super::db_error;
use crate::store::SettingsStore;

/// PostgreSQL-backed [`SettingsStore`].
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn attendance(&self) -> AppResult<Option<AttendanceSettings>> {
        sqlx::query_as::<_, AttendanceSettings>(
            "SELECT google_form_url, updated_by, updated_at FROM attendance_settings",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to load attendance settings"))
    }

    async fn set_attendance_form(
        &self,
        google_form_url: Option<String>,
        updated_by: Uuid,
    ) -> AppResult<AttendanceSettings> {
        sqlx::query_as::<_, AttendanceSettings>(
            "INSERT INTO attendance_settings (id, google_form_url, updated_by, updated_at) \
             VALUES (TRUE, $1, $2, NOW()) \
             ON CONFLICT (id) DO UPDATE SET \
             google_form_url = EXCLUDED.google_form_url, \
             updated_by = EXCLUDED.updated_by, \
             updated_at = EXCLUDED.updated_at \
             RETURNING google_form_url, updated_by, updated_at",
        )
        .bind(google_form_url)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to save attendance settings"))
    }
}
