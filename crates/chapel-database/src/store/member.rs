use async_trait::async_trait;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::member::{CreateMember, Member, MemberRole, UpdateMember};

/// Filters for the admin member listing.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    /// Only members holding this role.
    pub role: Option<MemberRole>,
    /// Case-insensitive substring of name or email.
    pub search: Option<String>,
}

/// The credential store.
///
/// Emails are normalized (trimmed, lower-cased) by every implementation
/// before they are written or compared, and are unique across members.
#[async_trait]
pub trait MemberStore: Send + Sync + std::fmt::Debug {
    /// Point lookup by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>>;

    /// Point lookup by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// Insert a member. A taken email is a `BadRequest` "Email already registered".
    async fn create(&self, data: CreateMember) -> AppResult<Member>;

    /// Apply a partial update. Returns `None` if the member does not exist.
    async fn update(&self, id: Uuid, data: UpdateMember) -> AppResult<Option<Member>>;

    /// Replace the stored password hash. Returns `false` if the member does not exist.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool>;

    /// Hard delete. Returns `false` if the member does not exist.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Page through members, newest first.
    async fn list(&self, filter: &MemberFilter, page: PageRequest)
    -> AppResult<PageResponse<Member>>;

    /// Total number of members.
    async fn count(&self) -> AppResult<u64>;
}
