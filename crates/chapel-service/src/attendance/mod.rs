//! Attendance form configuration.

pub mod service;

pub use service::{AttendanceService, SetAttendanceFormRequest};
