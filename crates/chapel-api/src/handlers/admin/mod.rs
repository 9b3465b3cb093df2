//! Admin-only handlers. Every route here sits behind the staff gate.

pub mod announcements;
pub mod attendance;
pub mod events;
pub mod members;
pub mod sharing;
