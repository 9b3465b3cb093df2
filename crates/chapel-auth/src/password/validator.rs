//! Password policy enforcement for new passwords.

use chapel_core::config::AuthConfig;
use chapel_core::error::AppError;

/// Longest accepted password, bounding hashing cost per request.
const MAX_LENGTH: usize = 128;

/// Validates new passwords against the configured length policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Returns `Ok(())` if the password meets the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let length = password.chars().count();
        if length < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if length > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at most {MAX_LENGTH} characters long"
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }
        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(&self, old_password: &str, new_password: &str) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_policy() {
        let v = PasswordValidator::new(&AuthConfig::default());
        assert!(v.validate("Secret123!").is_ok());
        assert!(v.validate("short").is_err());
        assert!(v.validate(&"x".repeat(129)).is_err());
        assert!(v.validate("        ").is_err());
    }

    #[test]
    fn test_not_same() {
        let v = PasswordValidator::new(&AuthConfig::default());
        assert!(v.validate_not_same("a", "a").is_err());
        assert!(v.validate_not_same("a", "b").is_ok());
    }
}
