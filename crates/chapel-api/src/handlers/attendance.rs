//! Attendance form link for members.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, FormUrlResponse};
use crate::error::ApiResult;
use crate::extractors::ActiveMember;
use crate::state::AppState;

/// GET /api/attendance/form-url
pub async fn form_url(
    State(state): State<AppState>,
    _member: ActiveMember,
) -> ApiResult<Json<ApiResponse<FormUrlResponse>>> {
    let google_form_url = state.attendance_service.form_url().await?;
    Ok(Json(ApiResponse::ok(FormUrlResponse { google_form_url })))
}
