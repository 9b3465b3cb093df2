//! Admin prayer request and testimony moderation handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::sharing::{ModerationAction, PrayerRequest, Testimony};

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{JsonBody, PaginationParams, QueryParams, StaffMember};
use crate::state::AppState;

/// GET /api/admin/prayer-requests
pub async fn list_prayers(
    State(state): State<AppState>,
    staff: StaffMember,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<PrayerRequest>>>> {
    let page = state
        .prayer_service
        .list_all(&staff, params.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/admin/prayer-requests/{id}/approve
pub async fn approve_prayer(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<PrayerRequest>>> {
    let prayer = state.prayer_service.approve(&staff, id).await?;
    Ok(Json(ApiResponse::ok(prayer)))
}

/// GET /api/admin/testimonies
pub async fn list_testimonies(
    State(state): State<AppState>,
    staff: StaffMember,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Testimony>>>> {
    let page = state
        .testimony_service
        .list_all(&staff, params.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/admin/testimonies/{id}/moderate
pub async fn moderate_testimony(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
    JsonBody(action): JsonBody<ModerationAction>,
) -> ApiResult<Json<ApiResponse<Testimony>>> {
    let testimony = state.testimony_service.moderate(&staff, id, action).await?;
    Ok(Json(ApiResponse::ok(testimony)))
}
