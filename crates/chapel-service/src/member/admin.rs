//! Admin member management: listing, CRUD, role promotion, activation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use chapel_auth::{PasswordHasher, PasswordValidator};
use chapel_core::error::AppError;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_database::{MemberFilter, MemberStore};
use chapel_entity::member::{
    CreateMember, MemberProfile, MemberRole, NotificationPreference, UpdateMember,
};

use crate::context::RequestContext;

/// Request to create a member on someone's behalf.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminCreateMemberRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Role assignment.
    #[serde(default)]
    pub role: MemberRole,
    /// Department memberships.
    #[serde(default)]
    pub departments: Vec<String>,
    /// Notification preference.
    #[serde(default)]
    pub notification_preference: NotificationPreference,
    /// SMS opt-in.
    #[serde(default)]
    pub sms_opt_in: bool,
}

/// Request to update a member (admin).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AdminUpdateMemberRequest {
    /// New given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    /// New family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    /// New email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// Replacement department set.
    pub departments: Option<Vec<String>>,
    /// New notification preference.
    pub notification_preference: Option<NotificationPreference>,
    /// New SMS opt-in.
    pub sms_opt_in: Option<bool>,
}

/// One entry of the role catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    /// Role tag.
    pub role: MemberRole,
    /// Whether the role opens the admin routes.
    pub is_staff: bool,
}

/// Handles administrative member management operations.
#[derive(Debug, Clone)]
pub struct AdminMemberService {
    /// Member store.
    members: Arc<dyn MemberStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
}

impl AdminMemberService {
    /// Creates a new admin member service.
    pub fn new(
        members: Arc<dyn MemberStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            members,
            hasher,
            validator,
        }
    }

    /// Lists members, optionally narrowed by role or a search term.
    pub async fn list_members(
        &self,
        ctx: &RequestContext,
        filter: MemberFilter,
        page: PageRequest,
    ) -> Result<PageResponse<MemberProfile>, AppError> {
        ctx.require_staff()?;
        let page = self.members.list(&filter, page).await?;
        Ok(page.map(|m| m.profile()))
    }

    /// Gets a single member by id.
    pub async fn get_member(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
    ) -> Result<MemberProfile, AppError> {
        ctx.require_staff()?;
        self.members
            .find_by_id(member_id)
            .await?
            .map(|m| m.profile())
            .ok_or_else(|| AppError::not_found("Member not found"))
    }

    /// Creates a member with an admin-chosen role and departments.
    pub async fn create_member(
        &self,
        ctx: &RequestContext,
        req: AdminCreateMemberRequest,
    ) -> Result<MemberProfile, AppError> {
        ctx.require_staff()?;
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.validator.validate(&req.password)?;

        if self.members.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::bad_request("Email already registered"));
        }

        let password_hash = self.hasher.hash_blocking(req.password).await?;
        let member = self
            .members
            .create(CreateMember {
                first_name: req.first_name.trim().to_string(),
                last_name: req.last_name.trim().to_string(),
                email: req.email,
                phone: req.phone,
                password_hash,
                role: req.role,
                is_active: true,
                departments: req.departments,
                notification_preference: req.notification_preference,
                sms_opt_in: req.sms_opt_in,
            })
            .await?;

        info!(
            admin_id = %ctx.member_id(),
            new_member_id = %member.id,
            role = %member.role,
            "Member created by admin"
        );

        Ok(member.profile())
    }

    /// Updates a member's profile fields (admin).
    pub async fn update_member(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
        req: AdminUpdateMemberRequest,
    ) -> Result<MemberProfile, AppError> {
        ctx.require_staff()?;
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if let Some(ref email) = req.email {
            if let Some(existing) = self.members.find_by_email(email).await? {
                if existing.id != member_id {
                    return Err(AppError::bad_request("Email already registered"));
                }
            }
        }

        let update = UpdateMember {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            departments: req.departments,
            notification_preference: req.notification_preference,
            sms_opt_in: req.sms_opt_in,
            ..UpdateMember::default()
        };
        let member = self.apply(member_id, update).await?;

        info!(admin_id = %ctx.member_id(), target_id = %member_id, "Member updated by admin");

        Ok(member)
    }

    /// Changes a member's role.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
        new_role: MemberRole,
    ) -> Result<MemberProfile, AppError> {
        ctx.require_staff()?;

        if member_id == ctx.member_id() {
            return Err(AppError::forbidden("Cannot change your own role"));
        }

        let member = self
            .apply(
                member_id,
                UpdateMember {
                    role: Some(new_role),
                    ..UpdateMember::default()
                },
            )
            .await?;

        info!(
            admin_id = %ctx.member_id(),
            target_id = %member_id,
            new_role = %new_role,
            "Member role changed"
        );

        Ok(member)
    }

    /// Activates or deactivates a member.
    pub async fn change_status(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
        is_active: bool,
    ) -> Result<MemberProfile, AppError> {
        ctx.require_staff()?;

        if member_id == ctx.member_id() {
            return Err(AppError::forbidden("Cannot change your own status"));
        }

        let member = self
            .apply(
                member_id,
                UpdateMember {
                    is_active: Some(is_active),
                    ..UpdateMember::default()
                },
            )
            .await?;

        info!(
            admin_id = %ctx.member_id(),
            target_id = %member_id,
            is_active,
            "Member status changed"
        );

        Ok(member)
    }

    /// Deletes a member.
    pub async fn delete_member(&self, ctx: &RequestContext, member_id: Uuid) -> Result<(), AppError> {
        ctx.require_staff()?;

        if member_id == ctx.member_id() {
            return Err(AppError::forbidden("Cannot delete your own account"));
        }

        if !self.members.delete(member_id).await? {
            return Err(AppError::not_found("Member not found"));
        }

        info!(admin_id = %ctx.member_id(), target_id = %member_id, "Member deleted");

        Ok(())
    }

    /// The fixed role catalogue.
    pub fn roles(&self, ctx: &RequestContext) -> Result<Vec<RoleInfo>, AppError> {
        ctx.require_staff()?;
        Ok(MemberRole::ALL
            .iter()
            .map(|&role| RoleInfo {
                role,
                is_staff: role.is_staff(),
            })
            .collect())
    }

    async fn apply(&self, member_id: Uuid, update: UpdateMember) -> Result<MemberProfile, AppError> {
        self.members
            .update(member_id, update)
            .await?
            .map(|m| m.profile())
            .ok_or_else(|| AppError::not_found("Member not found"))
    }
}
