//! Member-facing announcement handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::announcement::Announcement;

use crate::dto::request::AnnouncementListQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ActiveMember, QueryParams};
use crate::state::AppState;

/// GET /api/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    member: ActiveMember,
    QueryParams(query): QueryParams<AnnouncementListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<Announcement>>>> {
    let (filter, page) = query.split();
    let page = state
        .announcement_service
        .list_visible(&member, filter, page)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/announcements/{id}
pub async fn get_announcement(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Announcement>>> {
    let announcement = state.announcement_service.get_visible(&member, id).await?;
    Ok(Json(ApiResponse::ok(announcement)))
}
