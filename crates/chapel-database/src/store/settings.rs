use async_trait::async_trait;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_entity::settings::AttendanceSettings;

/// Single-row site settings.
#[async_trait]
pub trait SettingsStore: Send + Sync + std::fmt::Debug {
    /// Current attendance settings, if ever saved.
    async fn attendance(&self) -> AppResult<Option<AttendanceSettings>>;

    /// Upsert the attendance form link.
    async fn set_attendance_form(
        &self,
        google_form_url: Option<String>,
        updated_by: Uuid,
    ) -> AppResult<AttendanceSettings>;
}
