//! Bearer-token extractors that resolve the calling member.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use chapel_auth::Claims;
use chapel_auth::jwt::error::INVALID_CREDENTIALS;
use chapel_core::error::AppError;
use chapel_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Any member holding a valid token, active or not.
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// Request context for service calls.
    pub ctx: RequestContext,
    /// Claims of the presented token.
    pub claims: Claims,
}

/// A member holding a valid token whose account is active.
#[derive(Debug, Clone)]
pub struct ActiveMember(pub RequestContext);

/// An active Admin or Staff member.
#[derive(Debug, Clone)]
pub struct StaffMember(pub RequestContext);

/// Request extension left by the staff gate middleware.
#[derive(Debug, Clone)]
pub struct StaffContext(pub RequestContext);

impl std::ops::Deref for AuthMember {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl std::ops::Deref for ActiveMember {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::Deref for StaffMember {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn bearer_token(parts: &mut Parts) -> Result<String, AppError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::unauthorized(INVALID_CREDENTIALS))?;
    Ok(bearer.token().to_string())
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).await?;
        let (member, claims) = state.resolver.resolve(&token).await?;
        Ok(Self {
            ctx: RequestContext::new(member),
            claims,
        })
    }
}

impl FromRequestParts<AppState> for ActiveMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).await?;
        let (member, _) = state.resolver.resolve_active(&token).await?;
        Ok(Self(RequestContext::new(member)))
    }
}

impl FromRequestParts<AppState> for StaffMember {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(StaffContext(ctx)) = parts.extensions.get::<StaffContext>() {
            return Ok(Self(ctx.clone()));
        }
        let ActiveMember(ctx) = ActiveMember::from_request_parts(parts, state).await?;
        ctx.require_staff()?;
        Ok(Self(ctx))
    }
}
