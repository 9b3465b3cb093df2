//! HTTP request handlers, one module per resource.

pub mod admin;
pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod events;
pub mod health;
pub mod members;
pub mod sharing;
