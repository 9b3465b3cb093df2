//! Attendance form link, read through the cache.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use chapel_cache::{CacheManager, keys};
use chapel_core::error::AppError;
use chapel_core::traits::CacheProvider;
use chapel_database::SettingsStore;
use chapel_entity::settings::AttendanceSettings;

use crate::context::RequestContext;

/// How long the settings row stays cached between updates.
const SETTINGS_TTL: Duration = Duration::from_secs(300);

/// Staff update of the form link. `None` clears it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetAttendanceFormRequest {
    /// Google Form URL.
    #[validate(url(message = "Invalid form URL"))]
    pub google_form_url: Option<String>,
}

/// Handles the attendance form settings.
#[derive(Debug, Clone)]
pub struct AttendanceService {
    /// Settings store.
    settings: Arc<dyn SettingsStore>,
    /// Cache in front of the settings row.
    cache: CacheManager,
}

impl AttendanceService {
    /// Creates a new attendance service.
    pub fn new(settings: Arc<dyn SettingsStore>, cache: CacheManager) -> Self {
        Self { settings, cache }
    }

    /// The configured form link.
    pub async fn form_url(&self) -> Result<String, AppError> {
        self.current()
            .await?
            .and_then(|s| s.google_form_url)
            .ok_or_else(|| AppError::not_found("No attendance form configured"))
    }

    /// The settings row, for staff.
    pub async fn settings(
        &self,
        ctx: &RequestContext,
    ) -> Result<Option<AttendanceSettings>, AppError> {
        ctx.require_staff()?;
        self.current().await
    }

    /// Replaces the form link and drops the cached copy.
    pub async fn set_form_url(
        &self,
        ctx: &RequestContext,
        req: SetAttendanceFormRequest,
    ) -> Result<AttendanceSettings, AppError> {
        ctx.require_staff()?;
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let url = req
            .google_form_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let settings = self
            .settings
            .set_attendance_form(url, ctx.member_id())
            .await?;

        if let Err(e) = self.cache.delete(&keys::attendance_settings()).await {
            warn!(error = %e, "Failed to invalidate cached attendance settings");
        }

        info!(
            updated_by = %ctx.member_id(),
            configured = settings.google_form_url.is_some(),
            "Attendance form updated"
        );

        Ok(settings)
    }

    async fn current(&self) -> Result<Option<AttendanceSettings>, AppError> {
        let key = keys::attendance_settings();
        match self.cache.get_json::<AttendanceSettings>(&key).await {
            Ok(Some(settings)) => return Ok(Some(settings)),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Attendance settings cache read failed"),
        }

        let settings = self.settings.attendance().await?;
        if let Some(ref s) = settings {
            if let Err(e) = self.cache.set_json(&key, s, SETTINGS_TTL).await {
                warn!(error = %e, "Attendance settings cache write failed");
            }
        }
        Ok(settings)
    }
}
