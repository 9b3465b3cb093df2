use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::announcement::{
    Announcement, AnnouncementPriority, CreateAnnouncement, UpdateAnnouncement,
};
use chapel_entity::audience::Viewer;

/// Announcement persistence.
#[async_trait]
pub trait AnnouncementStore: Send + Sync + std::fmt::Debug {
    /// Insert an announcement.
    async fn create(&self, data: CreateAnnouncement) -> AppResult<Announcement>;

    /// Point lookup by id, without any audience check.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Announcement>>;

    /// Apply a partial update. Returns `None` if absent.
    async fn update(&self, id: Uuid, data: UpdateAnnouncement) -> AppResult<Option<Announcement>>;

    /// Hard delete. Returns `false` if absent.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Announcements visible to `viewer` at `now`, newest first.
    ///
    /// The audience predicate is applied by the store before pagination.
    async fn list_visible(
        &self,
        viewer: &Viewer,
        priority: Option<AnnouncementPriority>,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Announcement>>;

    /// Every announcement, newest first, optionally only published ones.
    async fn list_all(
        &self,
        published_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Announcement>>;
}
