//! Member repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use chapel_core::error::AppError;
use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::member::model::normalize_email;
use chapel_entity::member::{CreateMember, Member, UpdateMember};

use super::{db_error, violates};
use crate::store::{MemberFilter, MemberStore};

const EMAIL_CONSTRAINT: &str = "members_email_key";

/// PostgreSQL-backed [`MemberStore`].
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &MemberFilter) {
        qb.push(" WHERE TRUE");
        if let Some(role) = filter.role {
            qb.push(" AND role = ");
            qb.push_bind(role);
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            qb.push(" AND (first_name ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR last_name ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR email ILIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }
    }
}

#[async_trait]
impl MemberStore for MemberRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find member by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE email = $1")
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find member by email"))
    }

    async fn create(&self, data: CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, first_name, last_name, email, phone, password_hash, role, \
             is_active, departments, notification_preference, sms_opt_in) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(normalize_email(&data.email))
        .bind(&data.phone)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(data.is_active)
        .bind(&data.departments)
        .bind(data.notification_preference)
        .bind(data.sms_opt_in)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violates(&e, EMAIL_CONSTRAINT) {
                AppError::bad_request("Email already registered")
            } else {
                db_error("Failed to create member")(e)
            }
        })
    }

    async fn update(&self, id: Uuid, data: UpdateMember) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             email = COALESCE($4, email), \
             phone = COALESCE($5, phone), \
             role = COALESCE($6, role), \
             is_active = COALESCE($7, is_active), \
             departments = COALESCE($8, departments), \
             notification_preference = COALESCE($9, notification_preference), \
             sms_opt_in = COALESCE($10, sms_opt_in), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.email.as_deref().map(normalize_email))
        .bind(&data.phone)
        .bind(data.role)
        .bind(data.is_active)
        .bind(&data.departments)
        .bind(data.notification_preference)
        .bind(data.sms_opt_in)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if violates(&e, EMAIL_CONSTRAINT) {
                AppError::bad_request("Email already registered")
            } else {
                db_error("Failed to update member")(e)
            }
        })
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE members SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update password"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete member"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        filter: &MemberFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<Member>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM members");
        Self::push_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count members"))?;

        let mut select = QueryBuilder::<Postgres>::new("SELECT * FROM members");
        Self::push_filter(&mut select, filter);
        select.push(" ORDER BY join_date DESC LIMIT ");
        select.push_bind(page.sql_limit());
        select.push(" OFFSET ");
        select.push_bind(page.sql_offset());
        let members = select
            .build_query_as::<Member>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list members"))?;

        Ok(PageResponse::new(members, page, total as u64))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count members"))?;
        Ok(total as u64)
    }
}
