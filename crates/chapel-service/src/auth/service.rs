//! Authentication use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use chapel_auth::{Claims, PasswordHasher, PasswordValidator, TokenService};
use chapel_core::error::AppError;
use chapel_database::MemberStore;
use chapel_entity::member::{CreateMember, Member, MemberProfile, MemberRole, NotificationPreference};

use crate::context::RequestContext;

/// Message for any failed login, whichever part was wrong.
const INVALID_LOGIN: &str = "Invalid credentials";

/// Self-registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password; checked against the password policy.
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Phone number.
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

/// Login payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Password change payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// The password currently on file.
    #[validate(length(min = 1))]
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// What a successful login or registration hands back.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: &'static str,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The member the token was issued for.
    pub member: MemberProfile,
}

/// Handles credential checks and token lifecycle.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Member store.
    members: Arc<dyn MemberStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Token service.
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        members: Arc<dyn MemberStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            members,
            hasher,
            validator,
            tokens,
        }
    }

    /// Creates a plain `Member` account and signs it in.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthSession, AppError> {
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
                role: MemberRole::Member,
                is_active: true,
                departments: Vec::new(),
                notification_preference: NotificationPreference::Both,
                sms_opt_in: false,
            })
            .await?;

        info!(member_id = %member.id, "Member registered");

        self.session_for(&member)
    }

    /// Checks the email and password and issues a token.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthSession, AppError> {
        let Some(member) = self.members.find_by_email(&req.email).await? else {
            debug!("Login failed: unknown email");
            return Err(AppError::unauthorized(INVALID_LOGIN));
        };

        let valid = self
            .hasher
            .verify_blocking(req.password, member.password_hash.clone())
            .await;
        if !valid {
            debug!(member_id = %member.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(INVALID_LOGIN));
        }

        if !member.is_active {
            debug!(member_id = %member.id, "Login refused: account inactive");
            return Err(AppError::inactive_account("Inactive user"));
        }

        info!(member_id = %member.id, "Member logged in");

        self.session_for(&member)
    }

    /// Replaces the caller's password after checking the current one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        req: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let valid = self
            .hasher
            .verify_blocking(req.current_password.clone(), ctx.member.password_hash.clone())
            .await;
        if !valid {
            return Err(AppError::bad_request("Current password is incorrect"));
        }

        self.validator.validate(&req.new_password)?;
        self.validator
            .validate_not_same(&req.current_password, &req.new_password)?;

        let new_hash = self.hasher.hash_blocking(req.new_password).await?;
        if !self
            .members
            .update_password(ctx.member_id(), &new_hash)
            .await?
        {
            return Err(AppError::not_found("Member not found"));
        }

        info!(member_id = %ctx.member_id(), "Password changed");

        Ok(())
    }

    /// Revokes the presented token until it would have expired.
    pub async fn logout(&self, ctx: &RequestContext, claims: &Claims) -> Result<(), AppError> {
        self.tokens.revoke(claims).await?;
        info!(member_id = %ctx.member_id(), "Member logged out");
        Ok(())
    }

    fn session_for(&self, member: &Member) -> Result<AuthSession, AppError> {
        let issued = self.tokens.issue(member.id)?;
        Ok(AuthSession {
            access_token: issued.token,
            token_type: "bearer",
            expires_at: issued.expires_at,
            member: member.profile(),
        })
    }
}
