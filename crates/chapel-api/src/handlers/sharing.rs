//! Prayer request and testimony handlers for members.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::sharing::{Comment, PrayerRequest, Testimony};
use chapel_service::sharing::{
    CommentRequest, PrayRequest, SubmitPrayerRequest, SubmitTestimonyRequest,
};

use crate::dto::response::{ApiResponse, PrayerCountResponse};
use crate::error::ApiResult;
use crate::extractors::{ActiveMember, PaginationParams, QueryParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/prayer-requests
pub async fn submit_prayer(
    State(state): State<AppState>,
    member: ActiveMember,
    ValidatedJson(req): ValidatedJson<SubmitPrayerRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PrayerRequest>>)> {
    let prayer = state.prayer_service.submit(&member, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(prayer))))
}

/// GET /api/prayer-requests
pub async fn list_prayers(
    State(state): State<AppState>,
    _member: ActiveMember,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<PrayerRequest>>>> {
    let page = state
        .prayer_service
        .list_public(params.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/prayer-requests/{id}/pray
pub async fn pray(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<PrayRequest>,
) -> ApiResult<Json<ApiResponse<PrayerCountResponse>>> {
    let prayer_count = state.prayer_service.pray(&member, id, req).await?;
    Ok(Json(ApiResponse::ok(PrayerCountResponse { prayer_count })))
}

/// POST /api/prayer-requests/{id}/comments
pub async fn comment_on_prayer(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    let comment = state.prayer_service.comment(&member, id, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}

/// POST /api/testimonies
pub async fn submit_testimony(
    State(state): State<AppState>,
    member: ActiveMember,
    ValidatedJson(req): ValidatedJson<SubmitTestimonyRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Testimony>>)> {
    let testimony = state.testimony_service.submit(&member, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(testimony))))
}

/// GET /api/testimonies
pub async fn list_testimonies(
    State(state): State<AppState>,
    _member: ActiveMember,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Testimony>>>> {
    let page = state
        .testimony_service
        .list_approved(params.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/testimonies/{id}/comments
pub async fn comment_on_testimony(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    let comment = state.testimony_service.comment(&member, id, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}
