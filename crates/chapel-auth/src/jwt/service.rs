//! Token issue, verification and logout revocation.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use chapel_cache::RevocationList;
use chapel_core::config::AuthConfig;
use chapel_core::error::AppError;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};
use super::error::TokenError;

/// Issues, verifies and revokes access tokens.
///
/// Built once at startup from the validated [`AuthConfig`]; the signing
/// secret is never re-read. Clones share one revocation list.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    revoked: RevocationList,
}

impl TokenService {
    /// Creates the service from configuration with an empty revocation list.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            revoked: RevocationList::new(),
        }
    }

    /// Issues a token whose subject is `member_id`.
    pub fn issue(&self, member_id: Uuid) -> Result<IssuedToken, AppError> {
        self.encoder.issue(member_id)
    }

    /// Access to the encoder, e.g. to sign with a fixed issue time.
    pub fn encoder(&self) -> &JwtEncoder {
        &self.encoder
    }

    /// Verifies signature, expiry, subject shape and revocation.
    pub async fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.decoder.decode(token)?;
        claims.member_id()?;

        if self.revoked.is_revoked(claims.jti).await {
            return Err(TokenError::Revoked);
        }
        Ok(claims)
    }

    /// Blocklists the token until it would have expired anyway.
    pub async fn revoke(&self, claims: &Claims) -> Result<(), AppError> {
        let remaining = claims.remaining_ttl_seconds(Utc::now());
        if remaining == 0 {
            return Ok(());
        }
        self.revoked
            .revoke(claims.jti, Duration::from_secs(remaining))
            .await;
        debug!(jti = %claims.jti, remaining_secs = remaining, "Token revoked");
        Ok(())
    }
}
