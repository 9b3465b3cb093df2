//! Prayer request wall: submission, praying, comments and approval.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use chapel_core::error::AppError;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_database::SharingStore;
use chapel_entity::sharing::{Comment, PrayerRequest};

use crate::context::RequestContext;

const NOT_FOUND: &str = "Prayer request not found";

fn default_true() -> bool {
    true
}

fn default_increment() -> i64 {
    1
}

/// New prayer request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitPrayerRequest {
    /// Request text.
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    /// Whether it may appear on the wall once approved.
    #[serde(default = "default_true")]
    pub is_public: bool,
}

/// "I prayed for this."
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PrayRequest {
    /// How many prayers to add.
    #[serde(default = "default_increment")]
    #[validate(range(min = 1, max = 1000))]
    pub increment: i64,
}

/// A comment on a prayer request or testimony.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// Handles prayer requests.
#[derive(Debug, Clone)]
pub struct PrayerService {
    /// Sharing store.
    sharing: Arc<dyn SharingStore>,
}

impl PrayerService {
    /// Creates a new prayer service.
    pub fn new(sharing: Arc<dyn SharingStore>) -> Self {
        Self { sharing }
    }

    /// Submits a request; it waits for approval before it is listed.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        req: SubmitPrayerRequest,
    ) -> Result<PrayerRequest, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        let prayer = self
            .sharing
            .create_prayer(ctx.member_id(), req.content.trim(), req.is_public)
            .await?;
        info!(member_id = %ctx.member_id(), prayer_id = %prayer.id, "Prayer request submitted");
        Ok(prayer)
    }

    /// Approved public requests.
    pub async fn list_public(&self, page: PageRequest) -> Result<PageResponse<PrayerRequest>, AppError> {
        self.sharing.list_prayers(true, page).await
    }

    /// Adds to the prayer count; returns the new count.
    pub async fn pray(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: PrayRequest,
    ) -> Result<i64, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.reachable(ctx, id).await?;
        self.sharing
            .increment_prayer_count(id, req.increment)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Appends a comment.
    pub async fn comment(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: CommentRequest,
    ) -> Result<Comment, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.reachable(ctx, id).await?;
        let comment = Comment::new(ctx.member_id(), req.text.trim());
        if !self.sharing.add_prayer_comment(id, comment.clone()).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        Ok(comment)
    }

    /// Every request, pending and private included.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<PrayerRequest>, AppError> {
        ctx.require_staff()?;
        self.sharing.list_prayers(false, page).await
    }

    /// Approves a request for the wall.
    pub async fn approve(&self, ctx: &RequestContext, id: Uuid) -> Result<PrayerRequest, AppError> {
        ctx.require_staff()?;
        if !self.sharing.approve_prayer(id).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        info!(moderator_id = %ctx.member_id(), prayer_id = %id, "Prayer request approved");
        self.sharing
            .find_prayer(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    /// Requests a member may not see are reported as missing.
    async fn reachable(&self, ctx: &RequestContext, id: Uuid) -> Result<PrayerRequest, AppError> {
        self.sharing
            .find_prayer(id)
            .await?
            .filter(|p| p.is_reachable_by(ctx.member_id()))
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }
}
