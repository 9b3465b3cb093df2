//! Site-wide settings.

pub mod attendance;

pub use attendance::AttendanceSettings;
