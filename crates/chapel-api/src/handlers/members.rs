//! Member self-service handlers.

use axum::Json;
use axum::extract::State;

use chapel_entity::member::MemberProfile;
use chapel_service::member::UpdateProfileRequest;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ActiveMember, ValidatedJson};
use crate::state::AppState;

/// GET /api/members/me
pub async fn get_profile(
    State(state): State<AppState>,
    member: ActiveMember,
) -> Json<ApiResponse<MemberProfile>> {
    Json(ApiResponse::ok(state.member_service.profile(&member)))
}

/// PUT /api/members/me
pub async fn update_profile(
    State(state): State<AppState>,
    member: ActiveMember,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<MemberProfile>>> {
    let profile = state.member_service.update_profile(&member, req).await?;
    Ok(Json(ApiResponse::ok(profile)))
}
