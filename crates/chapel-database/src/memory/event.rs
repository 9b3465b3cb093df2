use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use chapel_core::error::AppError;
use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::audience::{Targeted, Viewer};
use chapel_entity::event::{
    CreateEvent, Event, EventRegistration, RegistrationStatus, UpdateEvent, VolunteerSignup,
    VolunteerStatus,
};

use super::paginate;
use crate::store::EventStore;

/// In-memory [`EventStore`].
///
/// RSVPs are keyed by `(event, member)` and signups by
/// `(event, member, role)`, so duplicates are rejected by the map itself.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: DashMap<Uuid, Event>,
    registrations: DashMap<(Uuid, Uuid), EventRegistration>,
    volunteers: DashMap<(Uuid, Uuid, String), VolunteerSignup>,
}

impl MemoryEventStore {
    fn collect_sorted(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        let mut items: Vec<Event> = self
            .events
            .iter()
            .filter(|e| keep(e.value()))
            .map(|e| e.value().clone())
            .collect();
        items.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        items
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            start_time: data.start_time,
            end_time: data.end_time,
            location: data.location,
            event_type: data.event_type,
            is_published: data.is_published,
            registration_required: data.registration_required,
            max_attendees: data.max_attendees,
            volunteers_needed: data.volunteers_needed,
            volunteer_roles: data.volunteer_roles,
            target: data.target,
            target_departments: data.target_departments,
            expires_at: data.expires_at,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        };
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        Ok(self.events.get(&id).map(|e| e.value().clone()))
    }

    async fn update(&self, id: Uuid, data: UpdateEvent) -> AppResult<Option<Event>> {
        Ok(self.events.get_mut(&id).map(|mut entry| {
            data.apply_to(entry.value_mut(), Utc::now());
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.events.remove(&id).is_some();
        if removed {
            self.registrations.retain(|(event_id, _), _| *event_id != id);
            self.volunteers.retain(|(event_id, _, _), _| *event_id != id);
        }
        Ok(removed)
    }

    async fn list_visible(
        &self,
        viewer: &Viewer,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let items = self.collect_sorted(|e| e.is_visible_to(viewer, now));
        Ok(paginate(items, page))
    }

    async fn list_all(
        &self,
        published_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Event>> {
        let items = self.collect_sorted(|e| !published_only || e.is_published);
        Ok(paginate(items, page))
    }

    async fn count_registrations(&self, event_id: Uuid) -> AppResult<u64> {
        Ok(self
            .registrations
            .iter()
            .filter(|r| r.key().0 == event_id)
            .count() as u64)
    }

    async fn create_registration(
        &self,
        event_id: Uuid,
        member_id: Uuid,
        member_name: &str,
    ) -> AppResult<EventRegistration> {
        match self.registrations.entry((event_id, member_id)) {
            Entry::Occupied(_) => Err(AppError::bad_request("Already registered for this event")),
            Entry::Vacant(slot) => {
                let registration = EventRegistration {
                    id: Uuid::new_v4(),
                    event_id,
                    member_id,
                    member_name: member_name.to_string(),
                    status: RegistrationStatus::Registered,
                    registered_at: Utc::now(),
                };
                slot.insert(registration.clone());
                Ok(registration)
            }
        }
    }

    async fn list_registrations(&self, event_id: Uuid) -> AppResult<Vec<EventRegistration>> {
        let mut items: Vec<EventRegistration> = self
            .registrations
            .iter()
            .filter(|r| r.key().0 == event_id)
            .map(|r| r.value().clone())
            .collect();
        items.sort_by(|a, b| a.registered_at.cmp(&b.registered_at));
        Ok(items)
    }

    async fn create_volunteer(
        &self,
        event_id: Uuid,
        member_id: Uuid,
        member_name: &str,
        role: &str,
    ) -> AppResult<VolunteerSignup> {
        match self
            .volunteers
            .entry((event_id, member_id, role.to_string()))
        {
            Entry::Occupied(_) => Err(AppError::bad_request("Already signed up for this role")),
            Entry::Vacant(slot) => {
                let signup = VolunteerSignup {
                    id: Uuid::new_v4(),
                    event_id,
                    member_id,
                    member_name: member_name.to_string(),
                    role: role.to_string(),
                    status: VolunteerStatus::Pending,
                    signed_up_at: Utc::now(),
                };
                slot.insert(signup.clone());
                Ok(signup)
            }
        }
    }

    async fn list_volunteers(&self, event_id: Uuid) -> AppResult<Vec<VolunteerSignup>> {
        let mut items: Vec<VolunteerSignup> = self
            .volunteers
            .iter()
            .filter(|v| v.key().0 == event_id)
            .map(|v| v.value().clone())
            .collect();
        items.sort_by(|a, b| a.signed_up_at.cmp(&b.signed_up_at));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapel_entity::audience::AudienceTarget;
    use chapel_entity::member::MemberRole;
    use chrono::Duration;

    fn event(start_in_hours: i64, published: bool) -> CreateEvent {
        let start = Utc::now() + Duration::hours(start_in_hours);
        CreateEvent {
            title: "Sunday service".into(),
            description: "Main service".into(),
            start_time: start,
            end_time: start + Duration::hours(2),
            location: "Sanctuary".into(),
            event_type: "service".into(),
            is_published: published,
            registration_required: true,
            max_attendees: Some(1),
            volunteers_needed: true,
            volunteer_roles: vec!["usher".into()],
            target: AudienceTarget::All,
            target_departments: vec![],
            expires_at: None,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_visible_events_sorted_by_start() {
        let store = MemoryEventStore::default();
        let later = store.create(event(48, true)).await.unwrap();
        let sooner = store.create(event(24, true)).await.unwrap();
        store.create(event(1, false)).await.unwrap();

        let viewer = Viewer::new(MemberRole::Member, vec![]);
        let page = store
            .list_visible(&viewer, Utc::now(), PageRequest::default())
            .await
            .unwrap();
        let ids: Vec<Uuid> = page.items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![sooner.id, later.id]);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let store = MemoryEventStore::default();
        let e = store.create(event(24, true)).await.unwrap();
        let member = Uuid::new_v4();
        store.create_registration(e.id, member, "A").await.unwrap();
        let err = store
            .create_registration(e.id, member, "A")
            .await
            .unwrap_err();
        assert_eq!(err.message, "Already registered for this event");
        assert_eq!(store.count_registrations(e.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let store = MemoryEventStore::default();
        let e = store.create(event(24, true)).await.unwrap();
        let member = Uuid::new_v4();
        store.create_registration(e.id, member, "A").await.unwrap();
        store
            .create_volunteer(e.id, member, "A", "usher")
            .await
            .unwrap();

        assert!(store.delete(e.id).await.unwrap());
        assert_eq!(store.count_registrations(e.id).await.unwrap(), 0);
        assert!(store.list_volunteers(e.id).await.unwrap().is_empty());
    }
}
