//! Announcement use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use chapel_auth::audience::ensure_visible;
use chapel_core::error::AppError;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_database::AnnouncementStore;
use chapel_entity::announcement::{
    Announcement, AnnouncementPriority, CreateAnnouncement, UpdateAnnouncement,
};
use chapel_entity::audience::AudienceTarget;

use crate::context::RequestContext;

/// Request to publish (or draft) an announcement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    /// Headline.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1))]
    pub content: String,
    /// Display name; defaults to the creator's full name.
    pub author: Option<String>,
    /// Priority.
    #[serde(default)]
    pub priority: AnnouncementPriority,
    /// Audience tag.
    #[serde(default)]
    pub target: AudienceTarget,
    /// Departments addressed when `target` is `departments`.
    #[serde(default)]
    pub target_departments: Vec<String>,
    /// Publication flag.
    #[serde(default)]
    pub is_published: bool,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Filters on the member-facing listing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnnouncementQuery {
    /// Only this priority.
    pub priority: Option<AnnouncementPriority>,
}

/// Handles announcement reads and writes.
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    /// Announcement store.
    announcements: Arc<dyn AnnouncementStore>,
}

impl AnnouncementService {
    /// Creates a new announcement service.
    pub fn new(announcements: Arc<dyn AnnouncementStore>) -> Self {
        Self { announcements }
    }

    /// Announcements the caller is in the audience of, newest first.
    pub async fn list_visible(
        &self,
        ctx: &RequestContext,
        query: AnnouncementQuery,
        page: PageRequest,
    ) -> Result<PageResponse<Announcement>, AppError> {
        self.announcements
            .list_visible(&ctx.viewer(), query.priority, ctx.request_time, page)
            .await
    }

    /// One announcement, if the caller is in its audience.
    pub async fn get_visible(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<Announcement, AppError> {
        let announcement = self.find(id).await?;
        ensure_visible(&announcement, &ctx.viewer(), ctx.request_time)?;
        Ok(announcement)
    }

    /// Every announcement, drafts and expired included unless
    /// `published_only` is set.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        published_only: bool,
        page: PageRequest,
    ) -> Result<PageResponse<Announcement>, AppError> {
        ctx.require_staff()?;
        self.announcements.list_all(published_only, page).await
    }

    /// One announcement regardless of audience.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Announcement, AppError> {
        ctx.require_staff()?;
        self.find(id).await
    }

    /// Creates an announcement.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement, AppError> {
        ctx.require_staff()?;
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        check_targeting(req.target, &req.target_departments)?;

        let announcement = self
            .announcements
            .create(CreateAnnouncement {
                title: req.title,
                content: req.content,
                author: req.author.unwrap_or_else(|| ctx.member.full_name()),
                author_id: Some(ctx.member_id()),
                priority: req.priority,
                target: req.target,
                target_departments: req.target_departments,
                is_published: req.is_published,
                expires_at: req.expires_at,
            })
            .await?;

        info!(
            author_id = %ctx.member_id(),
            announcement_id = %announcement.id,
            target = announcement.target.as_str(),
            published = announcement.is_published,
            "Announcement created"
        );

        Ok(announcement)
    }

    /// Applies a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: UpdateAnnouncement,
    ) -> Result<Announcement, AppError> {
        ctx.require_staff()?;
        if req.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if req.clear_expiry && req.expires_at.is_some() {
            return Err(AppError::validation(
                "expires_at and clear_expiry cannot be combined",
            ));
        }

        let current = self.find(id).await?;
        let target = req.target.unwrap_or(current.target);
        let departments = req
            .target_departments
            .as_deref()
            .unwrap_or(&current.target_departments);
        check_targeting(target, departments)?;

        let announcement = self
            .announcements
            .update(id, req)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;

        info!(editor_id = %ctx.member_id(), announcement_id = %id, "Announcement updated");

        Ok(announcement)
    }

    /// Deletes an announcement.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        ctx.require_staff()?;
        if !self.announcements.delete(id).await? {
            return Err(AppError::not_found("Announcement not found"));
        }
        info!(editor_id = %ctx.member_id(), announcement_id = %id, "Announcement deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Announcement, AppError> {
        self.announcements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement not found"))
    }
}

/// A department-targeted document must name at least one department.
pub(crate) fn check_targeting(target: AudienceTarget, departments: &[String]) -> Result<(), AppError> {
    if target == AudienceTarget::Departments && departments.iter().all(|d| d.trim().is_empty()) {
        return Err(AppError::validation(
            "target_departments is required when target is departments",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use chapel_core::error::ErrorKind;
    use chapel_entity::member::MemberRole;

    fn draft(title: &str, target: AudienceTarget, departments: &[&str]) -> CreateAnnouncementRequest {
        CreateAnnouncementRequest {
            title: title.into(),
            content: "Details inside".into(),
            author: None,
            priority: AnnouncementPriority::Normal,
            target,
            target_departments: departments.iter().map(|d| d.to_string()).collect(),
            is_published: true,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn test_unpublished_hidden_even_from_admin() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let mut req = draft("Draft", AudienceTarget::All, &[]);
        req.is_published = false;
        let created = fx.announcements.create(&admin, req).await.unwrap();

        let visible = fx
            .announcements
            .list_visible(&admin, AnnouncementQuery::default(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(visible.total_items, 0);

        let all = fx
            .announcements
            .list_all(&admin, false, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(all.total_items, 1);

        let err = fx.announcements.get_visible(&admin, created.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_department_targeting_through_service() {
        let fx = Fixture::new();
        let staff = fx.ctx("staff@x.org", MemberRole::Staff).await;
        let created = fx
            .announcements
            .create(&staff, draft("Choir practice", AudienceTarget::Departments, &["choir"]))
            .await
            .unwrap();
        assert_eq!(created.author, "Test Staff");

        let singer = RequestContext::new(
            fx.member_in("s@x.org", MemberRole::Choir, &["choir", "ushering"]).await,
        );
        let tech = RequestContext::new(fx.member_in("t@x.org", MemberRole::Member, &["media"]).await);

        assert!(fx.announcements.get_visible(&singer, created.id).await.is_ok());
        let err = fx.announcements.get_visible(&tech, created.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let listed = fx
            .announcements
            .list_visible(&tech, AnnouncementQuery::default(), PageRequest::default())
            .await
            .unwrap();
        assert!(listed.items.is_empty());
    }

    #[tokio::test]
    async fn test_missing_is_not_found() {
        let fx = Fixture::new();
        let member = fx.ctx("m@x.org", MemberRole::Member).await;
        let err = fx
            .announcements
            .get_visible(&member, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_departments_target_requires_departments() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let err = fx
            .announcements
            .create(&admin, draft("Nobody", AudienceTarget::Departments, &[]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_members_cannot_create() {
        let fx = Fixture::new();
        let member = fx.ctx("m@x.org", MemberRole::Deacon).await;
        let err = fx
            .announcements
            .create(&member, draft("Hi", AudienceTarget::All, &[]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_update_can_clear_expiry() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let mut req = draft("Harvest", AudienceTarget::All, &[]);
        req.expires_at = Some(Utc::now() + chrono::Duration::days(7));
        let created = fx.announcements.create(&admin, req).await.unwrap();

        let renamed = fx
            .announcements
            .update(
                &admin,
                created.id,
                UpdateAnnouncement {
                    title: Some("Harvest festival".into()),
                    ..UpdateAnnouncement::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.expires_at, created.expires_at);

        let cleared = fx
            .announcements
            .update(
                &admin,
                created.id,
                UpdateAnnouncement {
                    clear_expiry: true,
                    ..UpdateAnnouncement::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.expires_at, None);
        assert_eq!(cleared.title, "Harvest festival");
    }

    #[tokio::test]
    async fn test_update_rejects_expiry_with_clear() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let created = fx
            .announcements
            .create(&admin, draft("Both", AudienceTarget::All, &[]))
            .await
            .unwrap();
        let err = fx
            .announcements
            .update(
                &admin,
                created.id,
                UpdateAnnouncement {
                    expires_at: Some(Utc::now()),
                    clear_expiry: true,
                    ..UpdateAnnouncement::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
