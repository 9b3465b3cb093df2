use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::sharing::{Comment, ModerationAction, PrayerRequest, Testimony};

use super::paginate;
use crate::store::SharingStore;

/// In-memory [`SharingStore`].
#[derive(Debug, Default)]
pub struct MemorySharingStore {
    prayers: DashMap<Uuid, PrayerRequest>,
    testimonies: DashMap<Uuid, Testimony>,
}

#[async_trait]
impl SharingStore for MemorySharingStore {
    async fn create_prayer(
        &self,
        member_id: Uuid,
        content: &str,
        is_public: bool,
    ) -> AppResult<PrayerRequest> {
        let now = Utc::now();
        let prayer = PrayerRequest {
            id: Uuid::new_v4(),
            member_id,
            content: content.to_string(),
            is_public,
            is_approved: false,
            prayer_count: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.prayers.insert(prayer.id, prayer.clone());
        Ok(prayer)
    }

    async fn find_prayer(&self, id: Uuid) -> AppResult<Option<PrayerRequest>> {
        Ok(self.prayers.get(&id).map(|p| p.value().clone()))
    }

    async fn list_prayers(
        &self,
        listed_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<PrayerRequest>> {
        let mut items: Vec<PrayerRequest> = self
            .prayers
            .iter()
            .filter(|p| !listed_only || p.is_listed())
            .map(|p| p.value().clone())
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(items, page))
    }

    async fn approve_prayer(&self, id: Uuid) -> AppResult<bool> {
        Ok(self
            .prayers
            .get_mut(&id)
            .map(|mut p| {
                p.is_approved = true;
                p.updated_at = Utc::now();
            })
            .is_some())
    }

    async fn increment_prayer_count(&self, id: Uuid, by: i64) -> AppResult<Option<i64>> {
        Ok(self.prayers.get_mut(&id).map(|mut p| {
            p.prayer_count += by;
            p.updated_at = Utc::now();
            p.prayer_count
        }))
    }

    async fn add_prayer_comment(&self, id: Uuid, comment: Comment) -> AppResult<bool> {
        Ok(self
            .prayers
            .get_mut(&id)
            .map(|mut p| {
                p.comments.push(comment);
                p.updated_at = Utc::now();
            })
            .is_some())
    }

    async fn create_testimony(&self, member_id: Uuid, content: &str) -> AppResult<Testimony> {
        let now = Utc::now();
        let testimony = Testimony {
            id: Uuid::new_v4(),
            member_id,
            content: content.to_string(),
            is_approved: false,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.testimonies.insert(testimony.id, testimony.clone());
        Ok(testimony)
    }

    async fn find_testimony(&self, id: Uuid) -> AppResult<Option<Testimony>> {
        Ok(self.testimonies.get(&id).map(|t| t.value().clone()))
    }

    async fn list_testimonies(
        &self,
        approved_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Testimony>> {
        let mut items: Vec<Testimony> = self
            .testimonies
            .iter()
            .filter(|t| !approved_only || t.is_approved)
            .map(|t| t.value().clone())
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(items, page))
    }

    async fn moderate_testimony(
        &self,
        id: Uuid,
        action: &ModerationAction,
    ) -> AppResult<Option<Testimony>> {
        Ok(self.testimonies.get_mut(&id).map(|mut entry| {
            let t = entry.value_mut();
            match action {
                ModerationAction::Approve => t.is_approved = true,
                ModerationAction::Reject => t.is_approved = false,
                ModerationAction::Edit { content } => t.content = content.clone(),
            }
            t.updated_at = Utc::now();
            t.clone()
        }))
    }

    async fn add_testimony_comment(&self, id: Uuid, comment: Comment) -> AppResult<bool> {
        Ok(self
            .testimonies
            .get_mut(&id)
            .map(|mut t| {
                t.comments.push(comment);
                t.updated_at = Utc::now();
            })
            .is_some())
    }
}
