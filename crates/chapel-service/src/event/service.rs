//! Event use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use chapel_auth::audience::ensure_visible;
use chapel_core::error::AppError;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_database::EventStore;
use chapel_entity::audience::AudienceTarget;
use chapel_entity::event::{CreateEvent, Event, EventRegistration, UpdateEvent, VolunteerSignup};

use crate::announcement::service::check_targeting;
use crate::context::RequestContext;

fn default_event_type() -> String {
    "service".to_string()
}

/// Request to create an event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Start instant.
    pub start_time: DateTime<Utc>,
    /// End instant; must not precede the start.
    pub end_time: DateTime<Utc>,
    /// Location.
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Free-form type tag.
    #[serde(default = "default_event_type")]
    pub event_type: String,
    /// Publication flag.
    #[serde(default)]
    pub is_published: bool,
    /// Whether members RSVP.
    #[serde(default)]
    pub registration_required: bool,
    /// RSVP capacity.
    #[validate(range(min = 1))]
    pub max_attendees: Option<i32>,
    /// Whether volunteers are wanted.
    #[serde(default)]
    pub volunteers_needed: bool,
    /// Roles volunteers may sign up for.
    #[serde(default)]
    pub volunteer_roles: Vec<String>,
    /// Audience tag.
    #[serde(default)]
    pub target: AudienceTarget,
    /// Departments addressed when `target` is `departments`.
    #[serde(default)]
    pub target_departments: Vec<String>,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Volunteer signup payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VolunteerRequest {
    /// One of the event's volunteer roles.
    #[validate(length(min = 1, max = 100))]
    pub role: String,
}

/// An event's RSVPs and volunteers, for staff.
#[derive(Debug, Clone, Serialize)]
pub struct EventRoster {
    /// Registrations.
    pub registrations: Vec<EventRegistration>,
    /// Volunteer signups.
    pub volunteers: Vec<VolunteerSignup>,
}

/// Handles event reads, writes, RSVPs and volunteering.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event store.
    events: Arc<dyn EventStore>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }

    /// Events the caller is in the audience of, soonest first.
    pub async fn list_visible(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Event>, AppError> {
        self.events
            .list_visible(&ctx.viewer(), ctx.request_time, page)
            .await
    }

    /// One event, if the caller is in its audience.
    pub async fn get_visible(&self, ctx: &RequestContext, id: Uuid) -> Result<Event, AppError> {
        let event = self.find(id).await?;
        ensure_visible(&event, &ctx.viewer(), ctx.request_time)?;
        Ok(event)
    }

    /// RSVPs the caller to a visible event.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
    ) -> Result<EventRegistration, AppError> {
        let event = self.get_visible(ctx, event_id).await?;

        if !event.registration_required {
            return Err(AppError::bad_request(
                "Registration not required for this event",
            ));
        }

        let count = self.events.count_registrations(event_id).await?;
        if event.is_full(count) {
            return Err(AppError::bad_request("Event is full"));
        }

        let registration = self
            .events
            .create_registration(event_id, ctx.member_id(), &ctx.member.full_name())
            .await?;

        info!(member_id = %ctx.member_id(), %event_id, "Registered for event");

        Ok(registration)
    }

    /// Signs the caller up to volunteer in `role`.
    pub async fn volunteer(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
        req: VolunteerRequest,
    ) -> Result<VolunteerSignup, AppError> {
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        let event = self.get_visible(ctx, event_id).await?;

        if !event.volunteers_needed {
            return Err(AppError::bad_request("Volunteers not needed for this event"));
        }
        if !event.offers_role(&req.role) {
            return Err(AppError::bad_request("Invalid volunteer role"));
        }

        let signup = self
            .events
            .create_volunteer(event_id, ctx.member_id(), &ctx.member.full_name(), &req.role)
            .await?;

        info!(member_id = %ctx.member_id(), %event_id, role = %req.role, "Volunteer signup");

        Ok(signup)
    }

    /// Every event, unfiltered unless `published_only` is set.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        published_only: bool,
        page: PageRequest,
    ) -> Result<PageResponse<Event>, AppError> {
        ctx.require_staff()?;
        self.events.list_all(published_only, page).await
    }

    /// One event regardless of audience.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Event, AppError> {
        ctx.require_staff()?;
        self.find(id).await
    }

    /// Creates an event.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateEventRequest,
    ) -> Result<Event, AppError> {
        ctx.require_staff()?;
        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        check_schedule(req.start_time, req.end_time)?;
        check_targeting(req.target, &req.target_departments)?;

        let event = self
            .events
            .create(CreateEvent {
                title: req.title,
                description: req.description,
                start_time: req.start_time,
                end_time: req.end_time,
                location: req.location,
                event_type: req.event_type,
                is_published: req.is_published,
                registration_required: req.registration_required,
                max_attendees: req.max_attendees,
                volunteers_needed: req.volunteers_needed,
                volunteer_roles: req.volunteer_roles,
                target: req.target,
                target_departments: req.target_departments,
                expires_at: req.expires_at,
                created_by: Some(ctx.member_id()),
            })
            .await?;

        info!(
            creator_id = %ctx.member_id(),
            event_id = %event.id,
            start = %event.start_time,
            "Event created"
        );

        Ok(event)
    }

    /// Applies a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: UpdateEvent,
    ) -> Result<Event, AppError> {
        ctx.require_staff()?;
        if req.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if req.max_attendees.is_some_and(|m| m < 1) {
            return Err(AppError::validation("max_attendees must be at least 1"));
        }
        if req.clear_expiry && req.expires_at.is_some() {
            return Err(AppError::validation(
                "expires_at and clear_expiry cannot be combined",
            ));
        }

        let current = self.find(id).await?;
        check_schedule(
            req.start_time.unwrap_or(current.start_time),
            req.end_time.unwrap_or(current.end_time),
        )?;
        check_targeting(
            req.target.unwrap_or(current.target),
            req.target_departments
                .as_deref()
                .unwrap_or(&current.target_departments),
        )?;

        let event = self
            .events
            .update(id, req)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        info!(editor_id = %ctx.member_id(), event_id = %id, "Event updated");

        Ok(event)
    }

    /// Deletes an event with its registrations and signups.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        ctx.require_staff()?;
        if !self.events.delete(id).await? {
            return Err(AppError::not_found("Event not found"));
        }
        info!(editor_id = %ctx.member_id(), event_id = %id, "Event deleted");
        Ok(())
    }

    /// Registrations and volunteers for one event.
    pub async fn roster(&self, ctx: &RequestContext, id: Uuid) -> Result<EventRoster, AppError> {
        ctx.require_staff()?;
        self.find(id).await?;
        Ok(EventRoster {
            registrations: self.events.list_registrations(id).await?,
            volunteers: self.events.list_volunteers(id).await?,
        })
    }

    async fn find(&self, id: Uuid) -> Result<Event, AppError> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }
}

fn check_schedule(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::validation("end_time must not be before start_time"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use chapel_core::error::ErrorKind;
    use chapel_entity::member::MemberRole;
    use chrono::Duration;

    fn picnic() -> CreateEventRequest {
        let start = Utc::now() + Duration::days(3);
        CreateEventRequest {
            title: "Church picnic".into(),
            description: "Bring a dish".into(),
            start_time: start,
            end_time: start + Duration::hours(4),
            location: "Riverside park".into(),
            event_type: "fellowship".into(),
            is_published: true,
            registration_required: true,
            max_attendees: Some(1),
            volunteers_needed: true,
            volunteer_roles: vec!["grill".into(), "setup".into()],
            target: AudienceTarget::All,
            target_departments: vec![],
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn test_rsvp_duplicate_and_capacity() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let event = fx.events.create(&admin, picnic()).await.unwrap();

        let first = fx.ctx("one@x.org", MemberRole::Member).await;
        let reg = fx.events.register(&first, event.id).await.unwrap();
        assert_eq!(reg.member_name, "Test Member");

        let again = fx.events.register(&first, event.id).await.unwrap_err();
        assert_eq!(again.kind, ErrorKind::BadRequest);

        let second = fx.ctx("two@x.org", MemberRole::Member).await;
        let full = fx.events.register(&second, event.id).await.unwrap_err();
        assert_eq!(full.message, "Event is full");
    }

    #[tokio::test]
    async fn test_volunteer_role_must_be_offered() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let event = fx.events.create(&admin, picnic()).await.unwrap();
        let member = fx.ctx("v@x.org", MemberRole::Usher).await;

        let err = fx
            .events
            .volunteer(&member, event.id, VolunteerRequest { role: "juggling".into() })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid volunteer role");

        fx.events
            .volunteer(&member, event.id, VolunteerRequest { role: "grill".into() })
            .await
            .unwrap();
        let dup = fx
            .events
            .volunteer(&member, event.id, VolunteerRequest { role: "grill".into() })
            .await
            .unwrap_err();
        assert_eq!(dup.kind, ErrorKind::BadRequest);

        let roster = fx.events.roster(&admin, event.id).await.unwrap();
        assert_eq!(roster.volunteers.len(), 1);
        assert!(roster.registrations.is_empty());
    }

    #[tokio::test]
    async fn test_staff_event_hidden_from_members() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let mut req = picnic();
        req.target = AudienceTarget::Staff;
        let event = fx.events.create(&admin, req).await.unwrap();

        let member = fx.ctx("m@x.org", MemberRole::Member).await;
        let err = fx.events.register(&member, event.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let listed = fx.events.list_visible(&member, PageRequest::default()).await.unwrap();
        assert_eq!(listed.total_items, 0);
        let listed = fx.events.list_visible(&admin, PageRequest::default()).await.unwrap();
        assert_eq!(listed.total_items, 1);
    }

    #[tokio::test]
    async fn test_end_before_start_rejected() {
        let fx = Fixture::new();
        let admin = fx.ctx("admin@x.org", MemberRole::Admin).await;
        let mut req = picnic();
        req.end_time = req.start_time - Duration::hours(1);
        let err = fx.events.create(&admin, req).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
