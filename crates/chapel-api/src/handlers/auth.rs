//! Auth handlers: register, login, me, password change, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use chapel_entity::member::MemberProfile;
use chapel_service::auth::{AuthSession, ChangePasswordRequest, LoginRequest, RegisterRequest};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ActiveMember, AuthMember, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AuthSession>>)> {
    let session = state.auth_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(session))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthSession>>> {
    let session = state.auth_service.login(req).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// GET /api/auth/me
pub async fn me(auth: AuthMember) -> Json<ApiResponse<MemberProfile>> {
    Json(ApiResponse::ok(auth.member.profile()))
}

/// PUT /api/auth/update-password
pub async fn update_password(
    State(state): State<AppState>,
    member: ActiveMember,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.auth_service.change_password(&member, req).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password updated successfully",
    ))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.auth_service.logout(&auth.ctx, &auth.claims).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}
