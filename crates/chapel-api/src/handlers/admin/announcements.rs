//! Admin announcement handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::announcement::{Announcement, UpdateAnnouncement};
use chapel_service::announcement::CreateAnnouncementRequest;

use crate::dto::request::AdminListQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, QueryParams, StaffMember, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    staff: StaffMember,
    QueryParams(query): QueryParams<AdminListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<Announcement>>>> {
    let page = state
        .announcement_service
        .list_all(&staff, query.published_only, query.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/announcements/{id}
pub async fn get_announcement(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Announcement>>> {
    let announcement = state.announcement_service.get(&staff, id).await?;
    Ok(Json(ApiResponse::ok(announcement)))
}

/// POST /api/admin/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    staff: StaffMember,
    ValidatedJson(req): ValidatedJson<CreateAnnouncementRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Announcement>>)> {
    let announcement = state.announcement_service.create(&staff, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(announcement))))
}

/// PUT /api/admin/announcements/{id}
pub async fn update_announcement(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<UpdateAnnouncement>,
) -> ApiResult<Json<ApiResponse<Announcement>>> {
    let announcement = state.announcement_service.update(&staff, id, req).await?;
    Ok(Json(ApiResponse::ok(announcement)))
}

/// DELETE /api/admin/announcements/{id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.announcement_service.delete(&staff, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Announcement deleted",
    ))))
}
