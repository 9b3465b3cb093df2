//! # chapel-entity
//!
//! Domain entity models for Chapel. Every struct in this crate represents a
//! database table row or a domain value object. Database entities derive
//! `sqlx::FromRow` alongside `Serialize`/`Deserialize`.
//!
//! The [`audience`] module holds the visibility predicate shared by
//! announcements and events.

pub mod announcement;
pub mod audience;
pub mod event;
pub mod member;
pub mod settings;
pub mod sharing;
