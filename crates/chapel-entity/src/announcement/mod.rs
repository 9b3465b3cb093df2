//! Announcement domain entities.

pub mod model;
pub mod priority;

pub use model::{Announcement, CreateAnnouncement, UpdateAnnouncement};
pub use priority::AnnouncementPriority;
