//! # chapel-service
//!
//! Business logic service layer for Chapel. Each service orchestrates the
//! stores, the cache, and the auth primitives to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod context;
pub mod event;
pub mod member;
pub mod sharing;

#[cfg(test)]
mod test_support;

pub use announcement::AnnouncementService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use context::RequestContext;
pub use event::EventService;
pub use member::{AdminMemberService, MemberService};
pub use sharing::{PrayerService, TestimonyService};
