//! Cache key builders for all Chapel cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all Chapel cache keys.
const PREFIX: &str = "chapel";

/// Cache key for the attendance settings row.
pub fn attendance_settings() -> String {
    format!("{PREFIX}:settings:attendance")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_key() {
        assert_eq!(attendance_settings(), "chapel:settings:attendance");
    }
}
