use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::announcement::{
    Announcement, AnnouncementPriority, CreateAnnouncement, UpdateAnnouncement,
};
use chapel_entity::audience::{Targeted, Viewer};

use super::paginate;
use crate::store::AnnouncementStore;

/// In-memory [`AnnouncementStore`].
#[derive(Debug, Default)]
pub struct MemoryAnnouncementStore {
    announcements: DashMap<Uuid, Announcement>,
}

impl MemoryAnnouncementStore {
    fn collect_sorted(&self, keep: impl Fn(&Announcement) -> bool) -> Vec<Announcement> {
        let mut items: Vec<Announcement> = self
            .announcements
            .iter()
            .filter(|a| keep(a.value()))
            .map(|a| a.value().clone())
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }
}

#[async_trait]
impl AnnouncementStore for MemoryAnnouncementStore {
    async fn create(&self, data: CreateAnnouncement) -> AppResult<Announcement> {
        let now = Utc::now();
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: data.title,
            content: data.content,
            author: data.author,
            author_id: data.author_id,
            priority: data.priority,
            target: data.target,
            target_departments: data.target_departments,
            is_published: data.is_published,
            created_at: now,
            updated_at: now,
            expires_at: data.expires_at,
        };
        self.announcements
            .insert(announcement.id, announcement.clone());
        Ok(announcement)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Announcement>> {
        Ok(self.announcements.get(&id).map(|a| a.value().clone()))
    }

    async fn update(&self, id: Uuid, data: UpdateAnnouncement) -> AppResult<Option<Announcement>> {
        Ok(self.announcements.get_mut(&id).map(|mut entry| {
            data.apply_to(entry.value_mut(), Utc::now());
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.announcements.remove(&id).is_some())
    }

    async fn list_visible(
        &self,
        viewer: &Viewer,
        priority: Option<AnnouncementPriority>,
        now: DateTime<Utc>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Announcement>> {
        let items = self.collect_sorted(|a| {
            a.is_visible_to(viewer, now) && priority.is_none_or(|p| a.priority == p)
        });
        Ok(paginate(items, page))
    }

    async fn list_all(
        &self,
        published_only: bool,
        page: PageRequest,
    ) -> AppResult<PageResponse<Announcement>> {
        let items = self.collect_sorted(|a| !published_only || a.is_published);
        Ok(paginate(items, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapel_entity::audience::AudienceTarget;
    use chapel_entity::member::MemberRole;

    fn draft(target: AudienceTarget, published: bool, departments: &[&str]) -> CreateAnnouncement {
        CreateAnnouncement {
            title: "Choir rehearsal".into(),
            content: "Thursday 7pm".into(),
            author: "Office".into(),
            author_id: None,
            priority: AnnouncementPriority::Normal,
            target,
            target_departments: departments.iter().map(|d| d.to_string()).collect(),
            is_published: published,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn test_pagination_counts_visible_rows_only() {
        let store = MemoryAnnouncementStore::default();
        for _ in 0..3 {
            store
                .create(draft(AudienceTarget::Staff, true, &[]))
                .await
                .unwrap();
        }
        store
            .create(draft(AudienceTarget::All, true, &[]))
            .await
            .unwrap();
        store
            .create(draft(AudienceTarget::All, false, &[]))
            .await
            .unwrap();

        let member = Viewer::new(MemberRole::Member, vec![]);
        let page = store
            .list_visible(&member, None, Utc::now(), PageRequest::new(1, 1))
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items.len(), 1);

        let all = store.list_all(false, PageRequest::default()).await.unwrap();
        assert_eq!(all.total_items, 5);
        let published = store.list_all(true, PageRequest::default()).await.unwrap();
        assert_eq!(published.total_items, 4);
    }

    #[tokio::test]
    async fn test_priority_filter() {
        let store = MemoryAnnouncementStore::default();
        let mut urgent = draft(AudienceTarget::All, true, &[]);
        urgent.priority = AnnouncementPriority::Urgent;
        store.create(urgent).await.unwrap();
        store
            .create(draft(AudienceTarget::All, true, &[]))
            .await
            .unwrap();

        let viewer = Viewer::new(MemberRole::Member, vec![]);
        let page = store
            .list_visible(
                &viewer,
                Some(AnnouncementPriority::Urgent),
                Utc::now(),
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].priority, AnnouncementPriority::Urgent);
    }
}
