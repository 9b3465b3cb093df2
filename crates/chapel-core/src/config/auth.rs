//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum accepted length of the token signing secret, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Longest accepted access token lifetime: one day.
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;

/// Secrets that show up in sample configs and must never sign real tokens.
const PLACEHOLDER_SECRETS: &[&str] = &[
    "your-secret-key",
    "secret",
    "changeme",
    "CHANGE_ME_IN_PRODUCTION",
];

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). There is no default.
    #[serde(default, skip_serializing)]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Minimum password length for new passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2id memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2id iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            access_token_ttl_minutes: default_access_ttl(),
            password_min_length: default_password_min(),
            argon2_memory_kib: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
        }
    }
}

impl AuthConfig {
    /// Rejects a missing, placeholder, or short signing secret and a TTL
    /// outside `1..=MAX_ACCESS_TTL_MINUTES`.
    pub fn validate(&self) -> Result<(), AppError> {
        let secret = self.jwt_secret.trim();
        if secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set (CHAPEL__AUTH__JWT_SECRET)",
            ));
        }
        if PLACEHOLDER_SECRETS
            .iter()
            .any(|p| p.eq_ignore_ascii_case(secret))
        {
            return Err(AppError::configuration(
                "auth.jwt_secret is a placeholder value",
            ));
        }
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        if self.access_token_ttl_minutes == 0 {
            return Err(AppError::configuration(
                "auth.access_token_ttl_minutes must be greater than zero",
            ));
        }
        if self.access_token_ttl_minutes > MAX_ACCESS_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "auth.access_token_ttl_minutes must be at most {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    30
}

fn default_password_min() -> usize {
    8
}

fn default_argon2_memory() -> u32 {
    19 * 1024
}

fn default_argon2_iterations() -> u32 {
    2
}
