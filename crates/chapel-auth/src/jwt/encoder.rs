//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

use chapel_core::config::{AuthConfig, MAX_ACCESS_TTL_MINUTES};
use chapel_core::error::AppError;

use super::claims::Claims;

/// Creates signed HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token and the facts a client needs about it.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// Compact JWS.
    pub token: String,
    /// Token id.
    pub jti: Uuid,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// The TTL is capped at [`MAX_ACCESS_TTL_MINUTES`], which
    /// [`AuthConfig::validate`] already enforces.
    pub fn new(config: &AuthConfig) -> Self {
        let minutes = config.access_token_ttl_minutes.min(MAX_ACCESS_TTL_MINUTES);
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(minutes as i64),
        }
    }

    /// Issues a token for `member_id` that expires one TTL from now.
    pub fn issue(&self, member_id: Uuid) -> Result<IssuedToken, AppError> {
        self.issue_at(member_id, Utc::now())
    }

    /// Issues a token as if it were signed at `issued_at`.
    pub fn issue_at(&self, member_id: Uuid, issued_at: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: member_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            token,
            jti: claims.jti,
            expires_at,
        })
    }
}
