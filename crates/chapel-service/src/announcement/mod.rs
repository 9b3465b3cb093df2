//! Announcements: audience-filtered member reads and staff management.

pub mod service;

pub use service::{AnnouncementQuery, AnnouncementService, CreateAnnouncementRequest};
