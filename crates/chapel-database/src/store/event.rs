use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::audience::Viewer;
use chapel_entity::event::{CreateEvent, Event, EventRegistration, UpdateEvent, VolunteerSignup};

/// Event, RSVP and volunteer persistence.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug {
    /// Insert an event.
    async fn create(&self, data: CreateEvent) -> AppResult<Event>;

    /// Point lookup by id, without any audience check.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// Apply a partial update. Returns `None` if absent.
    async fn update(&self, id: Uuid, data: UpdateEvent) -> AppResult<Option<Event>>;

    /// Hard delete, cascading to registrations and signups.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Events visible to `viewer` at `now`, soonest first.
    async fn list_visible(
        &self,
        viewer: &Viewer,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Event>>;

    /// Every event, soonest first, optionally only published ones.
    async fn list_all(&self, published_only: bool, page: PageRequest)
    -> AppResult<PageResponse<Event>>;

    /// Number of RSVPs for an event.
    async fn count_registrations(&self, event_id: Uuid) -> AppResult<u64>;

    /// Record an RSVP. A repeat is a `BadRequest` "Already registered for this event".
    async fn create_registration(
        &self,
        event_id: Uuid,
        member_id: Uuid,
        member_name: &str,
    ) -> AppResult<EventRegistration>;

    /// RSVPs for an event, oldest first.
    async fn list_registrations(&self, event_id: Uuid) -> AppResult<Vec<EventRegistration>>;

    /// Record a volunteer signup. A repeat for the same role is a `BadRequest`.
    async fn create_volunteer(
        &self,
        event_id: Uuid,
        member_id: Uuid,
        member_name: &str,
        role: &str,
    ) -> AppResult<VolunteerSignup>;

    /// Volunteer signups for an event, oldest first.
    async fn list_volunteers(&self, event_id: Uuid) -> AppResult<Vec<VolunteerSignup>>;
}
