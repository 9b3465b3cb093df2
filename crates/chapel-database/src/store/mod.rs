//! Store traits consumed by the service layer.
//!
//! Each trait has a PostgreSQL implementation in
//! [`crate::repositories`] and an in-memory one in [`crate::memory`]. The
//! [`Stores`] bundle is what the application state holds.

mod announcement;
mod event;
mod member;
mod settings;
mod sharing;

use std::sync::Arc;

use async_trait::async_trait;

use chapel_core::result::AppResult;

pub use announcement::AnnouncementStore;
pub use event::EventStore;
pub use member::{MemberFilter, MemberStore};
pub use settings::SettingsStore;
pub use sharing::SharingStore;

use crate::connection::DatabasePool;
use crate::memory::MemoryHealth;

/// Connectivity probe for the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync + std::fmt::Debug {
    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Round-trip to the backend.
    async fn ping(&self) -> AppResult<()>;
}

/// One handle per store, shared by every request.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Member records.
    pub members: Arc<dyn MemberStore>,
    /// Announcements.
    pub announcements: Arc<dyn AnnouncementStore>,
    /// Events, RSVPs and volunteer signups.
    pub events: Arc<dyn EventStore>,
    /// Prayer requests and testimonies.
    pub sharing: Arc<dyn SharingStore>,
    /// Site settings.
    pub settings: Arc<dyn SettingsStore>,
    /// Connectivity probe.
    pub health: Arc<dyn StoreHealth>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(db: DatabasePool) -> Self {
        use crate::repositories::{
            AnnouncementRepository, EventRepository, MemberRepository, SettingsRepository,
            SharingRepository,
        };

        let pool = db.pool().clone();
        Self {
            members: Arc::new(MemberRepository::new(pool.clone())),
            announcements: Arc::new(AnnouncementRepository::new(pool.clone())),
            events: Arc::new(EventRepository::new(pool.clone())),
            sharing: Arc::new(SharingRepository::new(pool.clone())),
            settings: Arc::new(SettingsRepository::new(pool)),
            health: Arc::new(db),
        }
    }

    /// Stores backed by process-local maps.
    pub fn memory() -> Self {
        use crate::memory::{
            MemoryAnnouncementStore, MemoryEventStore, MemoryMemberStore, MemorySettingsStore,
            MemorySharingStore,
        };

        Self {
            members: Arc::new(MemoryMemberStore::default()),
            announcements: Arc::new(MemoryAnnouncementStore::default()),
            events: Arc::new(MemoryEventStore::default()),
            sharing: Arc::new(MemorySharingStore::default()),
            settings: Arc::new(MemorySettingsStore::default()),
            health: Arc::new(MemoryHealth),
        }
    }
}
