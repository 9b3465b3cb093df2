//! Prayer request and testimony repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::sharing::{Comment, ModerationAction, PrayerRequest, Testimony};

use super::db_error;
use crate::store::SharingStore;

/// PostgreSQL-backed [`SharingStore`].
#[derive(Debug, Clone)]
pub struct SharingRepository {
    pool: PgPool,
}

impl SharingRepository {
    /// Create a new sharing repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SharingStore for SharingRepository {
    async fn create_prayer(
        &self,
        member_id: Uuid,
        content: &str,
        is_public: bool,
    ) -> AppResult<PrayerRequest> {
        sqlx::query_as::<_, PrayerRequest>(
            "INSERT INTO prayer_requests (id, member_id, content, is_public) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(member_id)
        .bind(content)
        .bind(is_public)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create prayer request"))
    }

    async fn find_prayer(&self, id: Uuid) -> AppResult<Option<PrayerRequest>> {
        sqlx::query_as::<_, PrayerRequest>("SELECT * FROM prayer_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find prayer request"))
    }

    async fn list_prayers(
        &self,
        listed_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<PrayerRequest>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM prayer_requests \
             WHERE ($1 = FALSE OR (is_public AND is_approved))",
        )
        .bind(listed_only)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count prayer requests"))?;

        let items = sqlx::query_as::<_, PrayerRequest>(
            "SELECT * FROM prayer_requests \
             WHERE ($1 = FALSE OR (is_public AND is_approved)) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(listed_only)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list prayer requests"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn approve_prayer(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE prayer_requests SET is_approved = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to approve prayer request"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn increment_prayer_count(&self, id: Uuid, by: i64) -> AppResult<Option<i64>> {
        sqlx::query_scalar(
            "UPDATE prayer_requests SET prayer_count = prayer_count + $2, updated_at = NOW() \
             WHERE id = $1 RETURNING prayer_count",
        )
        .bind(id)
        .bind(by)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to increment prayer count"))
    }

    async fn add_prayer_comment(&self, id: Uuid, comment: Comment) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE prayer_requests SET comments = comments || $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(Json(vec![comment]))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to add prayer comment"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_testimony(&self, member_id: Uuid, content: &str) -> AppResult<Testimony> {
        sqlx::query_as::<_, Testimony>(
            "INSERT INTO testimonies (id, member_id, content) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(member_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create testimony"))
    }

    async fn find_testimony(&self, id: Uuid) -> AppResult<Option<Testimony>> {
        sqlx::query_as::<_, Testimony>("SELECT * FROM testimonies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find testimony"))
    }

    async fn list_testimonies(
        &self,
        approved_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Testimony>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM testimonies WHERE ($1 = FALSE OR is_approved)")
                .bind(approved_only)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to count testimonies"))?;

        let items = sqlx::query_as::<_, Testimony>(
            "SELECT * FROM testimonies WHERE ($1 = FALSE OR is_approved) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(approved_only)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list testimonies"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn moderate_testimony(
        &self,
        id: Uuid,
        action: &ModerationAction,
    ) -> AppResult<Option<Testimony>> {
        let query = match action {
            ModerationAction::Approve => sqlx::query_as::<_, Testimony>(
                "UPDATE testimonies SET is_approved = TRUE, updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id),
            ModerationAction::Reject => sqlx::query_as::<_, Testimony>(
                "UPDATE testimonies SET is_approved = FALSE, updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id),
            ModerationAction::Edit { content } => sqlx::query_as::<_, Testimony>(
                "UPDATE testimonies SET content = $2, updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id)
            .bind(content.as_str()),
        };

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to moderate testimony"))
    }

    async fn add_testimony_comment(&self, id: Uuid, comment: Comment) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE testimonies SET comments = comments || $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(Json(vec![comment]))
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to add testimony comment"))?;
        Ok(result.rows_affected() > 0)
    }
}
