//! Testimonies: submission, comments and moderation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use chapel_core::error::AppError;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_database::SharingStore;
use chapel_entity::sharing::{Comment, ModerationAction, Testimony};

use crate::context::RequestContext;
use crate::sharing::prayer::CommentRequest;

const NOT_FOUND: &str = "Testimony not found";

/// New testimony.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitTestimonyRequest {
    /// Testimony text.
    #[validate(length(min = 1, max = 10000))]
    pub content: String,
}

/// Handles testimonies.
#[derive(Debug, Clone)]
pub struct TestimonyService {
    /// Sharing store.
    sharing: Arc<dyn SharingStore>,
}

impl TestimonyService {
    /// Creates a new testimony service.
    pub fn new(sharing: Arc<dyn SharingStore>) -> Self {
        Self { sharing }
    }

    /// Submits a testimony for moderation.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        req: SubmitTestimonyRequest,
    ) -> Result<Testimony, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        let testimony = self
            .sharing
            .create_testimony(ctx.member_id(), req.content.trim())
            .await?;
        info!(member_id = %ctx.member_id(), testimony_id = %testimony.id, "Testimony submitted");
        Ok(testimony)
    }

    /// Approved testimonies.
    pub async fn list_approved(&self, page: PageRequest) -> Result<PageResponse<Testimony>, AppError> {
        self.sharing.list_testimonies(true, page).await
    }

    /// Appends a comment to an approved testimony or the caller's own.
    pub async fn comment(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: CommentRequest,
    ) -> Result<Comment, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        self.sharing
            .find_testimony(id)
            .await?
            .filter(|t| t.is_reachable_by(ctx.member_id()))
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        let comment = Comment::new(ctx.member_id(), req.text.trim());
        if !self.sharing.add_testimony_comment(id, comment.clone()).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }
        Ok(comment)
    }

    /// Every testimony, pending included.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Testimony>, AppError> {
        ctx.require_staff()?;
        self.sharing.list_testimonies(false, page).await
    }

    /// Approves, rejects or edits a testimony.
    pub async fn moderate(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        action: ModerationAction,
    ) -> Result<Testimony, AppError> {
        ctx.require_staff()?;
        if let ModerationAction::Edit { ref content } = action {
            if content.trim().is_empty() {
                return Err(AppError::validation("Content cannot be empty"));
            }
        }

        let testimony = self
            .sharing
            .moderate_testimony(id, &action)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

        info!(
            moderator_id = %ctx.member_id(),
            testimony_id = %id,
            action = action.label(),
            "Testimony moderated"
        );

        Ok(testimony)
    }
}
