//! JWT claims structure used in access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TokenError;

/// JWT claims payload embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the member id, always as a hyphenated UUID string.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token id, used by the logout revocation list.
    pub jti: Uuid,
}

impl Claims {
    /// Parses the subject back into a member id.
    pub fn member_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Seconds left before expiry at `now`, zero if already expired.
    pub fn remaining_ttl_seconds(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from(self.exp - now.timestamp()).unwrap_or(0)
    }
}
