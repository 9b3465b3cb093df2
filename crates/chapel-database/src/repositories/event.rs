//! Event, RSVP and volunteer repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use chapel_core::error::AppError;
use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::audience::Viewer;
use chapel_entity::event::{CreateEvent, Event, EventRegistration, UpdateEvent, VolunteerSignup};

use super::{db_error, violates};
use crate::audience::push_visible_clause;
use crate::store::EventStore;

/// PostgreSQL-backed [`EventStore`].
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, title, description, start_time, end_time, location, \
             event_type, is_published, registration_required, max_attendees, volunteers_needed, \
             volunteer_roles, target, target_departments, expires_at, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.location)
        .bind(&data.event_type)
        .bind(data.is_published)
        .bind(data.registration_required)
        .bind(data.max_attendees)
        .bind(data.volunteers_needed)
        .bind(&data.volunteer_roles)
        .bind(data.target)
        .bind(&data.target_departments)
        .bind(data.expires_at)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create event"))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find event"))
    }

    async fn update(&self, id: Uuid, data: UpdateEvent) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET \
             title = COALESCE($2, title), \
             description = COALESCE($3, description), \
             start_time = COALESCE($4, start_time), \
             end_time = COALESCE($5, end_time), \
             location = COALESCE($6, location), \
             event_type = COALESCE($7, event_type), \
             is_published = COALESCE($8, is_published), \
             registration_required = COALESCE($9, registration_required), \
             max_attendees = COALESCE($10, max_attendees), \
             volunteers_needed = COALESCE($11, volunteers_needed), \
             volunteer_roles = COALESCE($12, volunteer_roles), \
             target = COALESCE($13, target), \
             target_departments = COALESCE($14, target_departments), \
             expires_at = CASE WHEN $16 THEN NULL ELSE COALESCE($15, expires_at) END, \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.location)
        .bind(&data.event_type)
        .bind(data.is_published)
        .bind(data.registration_required)
        .bind(data.max_attendees)
        .bind(data.volunteers_needed)
        .bind(&data.volunteer_roles)
        .bind(data.target)
        .bind(&data.target_departments)
        .bind(data.expires_at)
        .bind(data.clear_expiry)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update event"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete event"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_visible(
        &self,
        viewer: &Viewer,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM events WHERE ");
        push_visible_clause(&mut count, viewer, now);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count visible events"))?;

        let mut select = QueryBuilder::<Postgres>::new("SELECT * FROM events WHERE ");
        push_visible_clause(&mut select, viewer, now);
        select.push(" ORDER BY start_time ASC LIMIT ");
        select.push_bind(page.sql_limit());
        select.push(" OFFSET ");
        select.push_bind(page.sql_offset());
        let items = select
            .build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list visible events"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn list_all(
        &self,
        published_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE ($1 = FALSE OR is_published)")
                .bind(published_only)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to count events"))?;

        let items = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE ($1 = FALSE OR is_published) \
             ORDER BY start_time ASC LIMIT $2 OFFSET $3",
        )
        .bind(published_only)
        .bind(page.sql_limit())
        .bind(page.sql_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list events"))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    async fn count_registrations(&self, event_id: Uuid) -> AppResult<u64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM event_registrations WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&self.pool)
                .await
                .map_err(db_error("Failed to count registrations"))?;
        Ok(total as u64)
    }

    async fn create_registration(
        &self,
        event_id: Uuid,
        member_id: Uuid,
        member_name: &str,
    ) -> AppResult<EventRegistration> {
        sqlx::query_as::<_, EventRegistration>(
            "INSERT INTO event_registrations (id, event_id, member_id, member_name) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(event_id)
        .bind(member_id)
        .bind(member_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violates(&e, "event_registrations_event_member_key") {
                AppError::bad_request("Already registered for this event")
            } else {
                db_error("Failed to create registration")(e)
            }
        })
    }

    async fn list_registrations(&self, event_id: Uuid) -> AppResult<Vec<EventRegistration>> {
        sqlx::query_as::<_, EventRegistration>(
            "SELECT * FROM event_registrations WHERE event_id = $1 ORDER BY registered_at ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list registrations"))
    }

    async fn create_volunteer(
        &self,
        event_id: Uuid,
        member_id: Uuid,
        member_name: &str,
        role: &str,
    ) -> AppResult<VolunteerSignup> {
        sqlx::query_as::<_, VolunteerSignup>(
            "INSERT INTO volunteer_signups (id, event_id, member_id, member_name, role) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(event_id)
        .bind(member_id)
        .bind(member_name)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violates(&e, "volunteer_signups_event_member_role_key") {
                AppError::bad_request("Already signed up for this role")
            } else {
                db_error("Failed to create volunteer signup")(e)
            }
        })
    }

    async fn list_volunteers(&self, event_id: Uuid) -> AppResult<Vec<VolunteerSignup>> {
        sqlx::query_as::<_, VolunteerSignup>(
            "SELECT * FROM volunteer_signups WHERE event_id = $1 ORDER BY signed_up_at ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list volunteer signups"))
    }
}
