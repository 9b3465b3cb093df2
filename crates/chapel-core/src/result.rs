//! Convenience result type alias for Chapel.

use crate::error::AppError;

/// A specialized `Result` type for Chapel operations.
pub type AppResult<T> = Result<T, AppError>;
