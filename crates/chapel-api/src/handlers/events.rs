//! Member-facing event handlers: listing, details, RSVP, volunteering.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::event::{Event, EventRegistration, VolunteerSignup};
use chapel_service::event::VolunteerRequest;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ActiveMember, PaginationParams, QueryParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    member: ActiveMember,
    QueryParams(params): QueryParams<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Event>>>> {
    let page = state
        .event_service
        .list_visible(&member, params.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Event>>> {
    let event = state.event_service.get_visible(&member, id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// POST /api/events/{id}/register
pub async fn register(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<ApiResponse<EventRegistration>>)> {
    let registration = state.event_service.register(&member, id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(registration))))
}

/// POST /api/events/{id}/volunteer
pub async fn volunteer(
    State(state): State<AppState>,
    member: ActiveMember,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<VolunteerRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<VolunteerSignup>>)> {
    let signup = state.event_service.volunteer(&member, id, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(signup))))
}
