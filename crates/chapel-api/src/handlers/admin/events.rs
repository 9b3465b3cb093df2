//! Admin event handlers, including RSVP and volunteer rosters.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::event::{Event, EventRegistration, UpdateEvent, VolunteerSignup};
use chapel_service::event::CreateEventRequest;

use crate::dto::request::AdminListQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, QueryParams, StaffMember, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/events
pub async fn list_events(
    State(state): State<AppState>,
    staff: StaffMember,
    QueryParams(query): QueryParams<AdminListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<Event>>>> {
    let page = state
        .event_service
        .list_all(&staff, query.published_only, query.page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Event>>> {
    let event = state.event_service.get(&staff, id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// POST /api/admin/events
pub async fn create_event(
    State(state): State<AppState>,
    staff: StaffMember,
    ValidatedJson(req): ValidatedJson<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Event>>)> {
    let event = state.event_service.create(&staff, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
}

/// PUT /api/admin/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<UpdateEvent>,
) -> ApiResult<Json<ApiResponse<Event>>> {
    let event = state.event_service.update(&staff, id, req).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /api/admin/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.event_service.delete(&staff, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Event deleted"))))
}

/// GET /api/admin/events/{id}/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<EventRegistration>>>> {
    let roster = state.event_service.roster(&staff, id).await?;
    Ok(Json(ApiResponse::ok(roster.registrations)))
}

/// GET /api/admin/events/{id}/volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<VolunteerSignup>>>> {
    let roster = state.event_service.roster(&staff, id).await?;
    Ok(Json(ApiResponse::ok(roster.volunteers)))
}
