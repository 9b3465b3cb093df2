//! # chapel-database
//!
//! Persistence for Chapel. The [`store`] traits are what the service layer
//! sees; [`repositories`] implements them on PostgreSQL and [`memory`]
//! implements them on process-local maps.

pub mod audience;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{
    AnnouncementStore, EventStore, MemberFilter, MemberStore, SettingsStore, SharingStore,
    StoreHealth, Stores,
};
