//! Admin attendance form settings.

use axum::Json;
use axum::extract::State;

use chapel_entity::settings::AttendanceSettings;
use chapel_service::attendance::SetAttendanceFormRequest;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{StaffMember, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/attendance/form-url
pub async fn get_settings(
    State(state): State<AppState>,
    staff: StaffMember,
) -> ApiResult<Json<ApiResponse<Option<AttendanceSettings>>>> {
    let settings = state.attendance_service.settings(&staff).await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// PUT /api/admin/attendance/form-url
pub async fn set_form_url(
    State(state): State<AppState>,
    staff: StaffMember,
    ValidatedJson(req): ValidatedJson<SetAttendanceFormRequest>,
) -> ApiResult<Json<ApiResponse<AttendanceSettings>>> {
    let settings = state.attendance_service.set_form_url(&staff, req).await?;
    Ok(Json(ApiResponse::ok(settings)))
}
