//! Token verification failures.

use thiserror::Error;

use chapel_core::error::AppError;

/// The only message a client ever sees for a rejected credential.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Why a bearer token was rejected.
///
/// Kept distinct internally for logs and tests; every variant becomes the
/// same `Unauthorized` error at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token could not be parsed or its claims are unusable.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the server secret.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The token id was revoked at logout.
    #[error("token has been revoked")]
    Revoked,
}

impl From<TokenError> for AppError {
    fn from(_: TokenError) -> Self {
        AppError::unauthorized(INVALID_CREDENTIALS)
    }
}
