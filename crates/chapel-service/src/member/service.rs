//! Member self-service: viewing and editing one's own profile.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use chapel_core::error::AppError;
use chapel_database::MemberStore;
use chapel_entity::member::{MemberProfile, NotificationPreference, UpdateMember};

use crate::context::RequestContext;

/// Fields a member may change on their own record.
///
/// Role, email, departments and the active flag are administrative.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    /// New family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    /// New phone number.
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    /// New notification preference.
    pub notification_preference: Option<NotificationPreference>,
    /// New SMS opt-in.
    pub sms_opt_in: Option<bool>,
}

/// Handles member self-service operations.
#[derive(Debug, Clone)]
pub struct MemberService {
    /// Member store.
    members: Arc<dyn MemberStore>,
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(members: Arc<dyn MemberStore>) -> Self {
        Self { members }
    }

    /// The caller's own profile.
    pub fn profile(&self, ctx: &RequestContext) -> MemberProfile {
        ctx.member.profile()
    }

    /// Updates the caller's own profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> Result<MemberProfile, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let update = UpdateMember {
            first_name: req.first_name.map(|s| s.trim().to_string()),
            last_name: req.last_name.map(|s| s.trim().to_string()),
            phone: req.phone,
            notification_preference: req.notification_preference,
            sms_opt_in: req.sms_opt_in,
            ..UpdateMember::default()
        };

        let member = self
            .members
            .update(ctx.member_id(), update)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found"))?;

        info!(member_id = %member.id, "Profile updated");

        Ok(member.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use chapel_entity::member::MemberRole;

    #[tokio::test]
    async fn test_update_profile_leaves_role_alone() {
        let fx = Fixture::new();
        let ctx = fx.ctx("m@x.org", MemberRole::Usher).await;

        let profile = fx
            .members
            .update_profile(
                &ctx,
                UpdateProfileRequest {
                    phone: Some("555-0100".into()),
                    sms_opt_in: Some(true),
                    ..UpdateProfileRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
        assert!(profile.sms_opt_in);
        assert_eq!(profile.role, MemberRole::Usher);
        assert_eq!(profile.first_name, "Test");
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let fx = Fixture::new();
        let ctx = fx.ctx("m@x.org", MemberRole::Member).await;
        let err = fx
            .members
            .update_profile(
                &ctx,
                UpdateProfileRequest {
                    first_name: Some(String::new()),
                    ..UpdateProfileRequest::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, chapel_core::error::ErrorKind::Validation);
    }
}
