//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store backend name.
    pub database: String,
    /// Whether the store answered.
    pub database_connected: bool,
    /// Live cache entries.
    pub cache_entries: u64,
}

/// New prayer count after praying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerCountResponse {
    /// Updated count.
    pub prayer_count: i64,
}

/// The attendance form link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormUrlResponse {
    /// Google Form URL.
    pub google_form_url: String,
}
