use async_trait::async_trait;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::sharing::{Comment, ModerationAction, PrayerRequest, Testimony};

/// Prayer request and testimony persistence.
///
/// Counter increments and comment appends are single atomic updates.
#[async_trait]
pub trait SharingStore: Send + Sync + std::fmt::Debug {
    /// Insert a prayer request, unapproved with a zero count.
    async fn create_prayer(
        &self,
        member_id: Uuid,
        content: &str,
        is_public: bool,
    ) -> AppResult<PrayerRequest>;

    /// Point lookup.
    async fn find_prayer(&self, id: Uuid) -> AppResult<Option<PrayerRequest>>;

    /// Prayer requests, newest first. `listed_only` keeps public and approved ones.
    async fn list_prayers(
        &self,
        listed_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<PrayerRequest>>;

    /// Mark a prayer request approved. Returns `false` if absent.
    async fn approve_prayer(&self, id: Uuid) -> AppResult<bool>;

    /// Add `by` to the prayer count. Returns the new count, or `None` if absent.
    async fn increment_prayer_count(&self, id: Uuid, by: i64) -> AppResult<Option<i64>>;

    /// Append a comment. Returns `false` if absent.
    async fn add_prayer_comment(&self, id: Uuid, comment: Comment) -> AppResult<bool>;

    /// Insert a testimony, unapproved.
    async fn create_testimony(&self, member_id: Uuid, content: &str) -> AppResult<Testimony>;

    /// Point lookup.
    async fn find_testimony(&self, id: Uuid) -> AppResult<Option<Testimony>>;

    /// Testimonies, newest first. `approved_only` hides unmoderated ones.
    async fn list_testimonies(
        &self,
        approved_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Testimony>>;

    /// Apply a moderation decision. Returns `None` if absent.
    async fn moderate_testimony(
        &self,
        id: Uuid,
        action: &ModerationAction,
    ) -> AppResult<Option<Testimony>>;

    /// Append a comment. Returns `false` if absent.
    async fn add_testimony_comment(&self, id: Uuid, comment: Comment) -> AppResult<bool>;
}
