use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_entity::settings::AttendanceSettings;

use crate::store::SettingsStore;

/// In-memory [`SettingsStore`].
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    attendance: RwLock<Option<AttendanceSettings>>,
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn attendance(&self) -> AppResult<Option<AttendanceSettings>> {
        Ok(self.attendance.read().await.clone())
    }

    async fn set_attendance_form(
        &self,
        google_form_url: Option<String>,
        updated_by: Uuid,
    ) -> AppResult<AttendanceSettings> {
        let settings = AttendanceSettings {
            google_form_url,
            updated_by: Some(updated_by),
            updated_at: Utc::now(),
        };
        *self.attendance.write().await = Some(settings.clone());
        Ok(settings)
    }
}
