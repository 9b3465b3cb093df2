//! Announcement repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::announcement::{
    Announcement, AnnouncementPriority, CreateAnnouncement, UpdateAnnouncement,
};
use chapel_entity::audience::Viewer;

use super::db_error;
use crate::audience::push_visible_clause;
use crate::store::AnnouncementStore;

/// PostgreSQL-backed [`AnnouncementStore`].
#[derive(Debug, Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    /// Create a new announcement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn visible_query<'a>(
        head: &str,
        viewer: &Viewer,
        priority: Option<AnnouncementPriority>,
        now: DateTime<Utc>,
    ) -> QueryBuilder<'a, Postgres> {
        let mut qb = QueryBuilder::<Postgres>::new(head);
        qb.push(" WHERE ");
        push_visible_clause(&mut qb, viewer, now);
        if let Some(priority) = priority {
            qb.push(" AND priority = ");
            qb.push_bind(priority);
        }
        qb
    }
}

#[async_trait]
impl AnnouncementStore for AnnouncementRepository {
    async fn create(&self, data: CreateAnnouncement) -> AppResult<Announcement> {
        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (id, title, content, author, author_id, priority, target, \
             target_departments, is_published, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.author)
        .bind(data.author_id)
        .bind(data.priority)
        .bind(data.target)
        .bind(&data.target_departments)
        .bind(data.is_published)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create announcement"))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find announcement"))
    }

    async fn update(&self, id: Uuid, data: UpdateAnnouncement) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "UPDATE announcements SET \
             title = COALESCE($2, title), \
             content = COALESCE($3, content), \
             priority = COALESCE($4, priority), \
             target = COALESCE($5, target), \
             target_departments = COALESCE($6, target_departments), \
             is_published = COALESCE($7, is_published), \
             expires_at = CASE WHEN $9 THEN NULL ELSE COALESCE($8, expires_at) END, \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.priority)
        .bind(data.target)
        .bind(&data.target_departments)
        .bind(data.is_published)
        .bind(data.expires_at)
        .bind(data.clear_expiry)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update announcement"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete announcement"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_visible(
        &self,
        viewer: &Viewer,
        priority: Option<AnnouncementPriority>,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Announcement>> {
        let total: i64 =
            Self::visible_query("SELECT COUNT(*) FROM announcements", viewer, priority, now)
                .build_query_scalar()
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to count visible announcements"))?;

        let mut select =
            Self::visible_query("SELECT * FROM announcements", viewer, priority, now);
        select.push(" ORDER BY created_at DESC LIMIT ");
        select.push_bind(page.sql_limit());
        select.push(" OFFSET ");
        select.push_bind(page.sql_offset());
        let items = select
            .build_query_as::<Announcement>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list visible announcements"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn list_all(
        &self,
        published_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Announcement>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM announcements WHERE ($1 = FALSE OR is_published)",
        )
        .bind(published_only)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count announcements"))?;

        let items = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE ($1 = FALSE OR is_published) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(published_only)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list announcements"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }
}
