//! Admin member management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use chapel_core::types::PageResponse;
use chapel_entity::member::MemberProfile;
use chapel_service::member::{AdminCreateMemberRequest, AdminUpdateMemberRequest, RoleInfo};

use crate::dto::request::{MemberListQuery, RoleChangeRequest, StatusChangeRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, QueryParams, StaffMember, ValidatedJson};
use crate::state::AppState;

/// GET /api/admin/members
pub async fn list_members(
    State(state): State<AppState>,
    staff: StaffMember,
    QueryParams(query): QueryParams<MemberListQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<MemberProfile>>>> {
    let (filter, page) = query.split();
    let members = state
        .admin_member_service
        .list_members(&staff, filter, page)
        .await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// GET /api/admin/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MemberProfile>>> {
    let member = state.admin_member_service.get_member(&staff, id).await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// POST /api/admin/members
pub async fn create_member(
    State(state): State<AppState>,
    staff: StaffMember,
    ValidatedJson(req): ValidatedJson<AdminCreateMemberRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<MemberProfile>>)> {
    let member = state.admin_member_service.create_member(&staff, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(member))))
}

/// PUT /api/admin/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<AdminUpdateMemberRequest>,
) -> ApiResult<Json<ApiResponse<MemberProfile>>> {
    let member = state
        .admin_member_service
        .update_member(&staff, id, req)
        .await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// DELETE /api/admin/members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.admin_member_service.delete_member(&staff, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Member deleted"))))
}

/// PUT /api/admin/members/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<RoleChangeRequest>,
) -> ApiResult<Json<ApiResponse<MemberProfile>>> {
    let member = state
        .admin_member_service
        .change_role(&staff, id, req.role)
        .await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// PUT /api/admin/members/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    staff: StaffMember,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<StatusChangeRequest>,
) -> ApiResult<Json<ApiResponse<MemberProfile>>> {
    let member = state
        .admin_member_service
        .change_status(&staff, id, req.is_active)
        .await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// GET /api/admin/roles
pub async fn list_roles(
    State(state): State<AppState>,
    staff: StaffMember,
) -> ApiResult<Json<ApiResponse<Vec<RoleInfo>>>> {
    Ok(Json(ApiResponse::ok(state.admin_member_service.roles(&staff)?)))
}
