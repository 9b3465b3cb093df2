use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use chapel_core::error::AppError;
use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};
use chapel_entity::member::model::normalize_email;
use chapel_entity::member::{CreateMember, Member, UpdateMember};

use super::paginate;
use crate::store::{MemberFilter, MemberStore};

/// In-memory [`MemberStore`].
///
/// The email index is claimed through its entry API before a record is
/// written, which keeps emails unique under concurrent registration.
#[derive(Debug, Default)]
pub struct MemoryMemberStore {
    members: DashMap<Uuid, Member>,
    emails: DashMap<String, Uuid>,
}

impl MemoryMemberStore {
    fn claim_email(&self, email: &str, id: Uuid) -> AppResult<()> {
        match self.emails.entry(email.to_string()) {
            Entry::Occupied(existing) if *existing.get() != id => {
                Err(AppError::bad_request("Email already registered"))
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(id);
                Ok(())
            }
        }
    }
}

fn matches(member: &Member, filter: &MemberFilter) -> bool {
    if filter.role.is_some_and(|role| member.role != role) {
        return false;
    }
    match filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            member.first_name.to_lowercase().contains(&needle)
                || member.last_name.to_lowercase().contains(&needle)
                || member.email.contains(&needle)
        }
        None => true,
    }
}

#[async_trait]
impl MemberStore for MemoryMemberStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Member>> {
        Ok(self.members.get(&id).map(|m| m.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let id = self.emails.get(&normalize_email(email)).map(|id| *id);
        match id {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn create(&self, data: CreateMember) -> AppResult<Member> {
        let id = Uuid::new_v4();
        let email = normalize_email(&data.email);
        self.claim_email(&email, id)?;

        let now = Utc::now();
        let member = Member {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email,
            phone: data.phone,
            password_hash: data.password_hash,
            role: data.role,
            is_active: data.is_active,
            departments: data.departments,
            notification_preference: data.notification_preference,
            sms_opt_in: data.sms_opt_in,
            join_date: now,
            updated_at: now,
        };
        self.members.insert(id, member.clone());
        Ok(member)
    }

    async fn update(&self, id: Uuid, mut data: UpdateMember) -> AppResult<Option<Member>> {
        let Some(current_email) = self.members.get(&id).map(|m| m.email.clone()) else {
            return Ok(None);
        };

        let new_email = data.email.take().map(|e| normalize_email(&e));
        if let Some(email) = new_email.as_deref().filter(|e| *e != current_email) {
            self.claim_email(email, id)?;
        }

        let updated = self.members.get_mut(&id).map(|mut entry| {
            let member = entry.value_mut();
            data.apply_to(member);
            if let Some(email) = new_email.clone() {
                member.email = email;
            }
            member.updated_at = Utc::now();
            member.clone()
        });

        match (&updated, new_email) {
            (Some(_), Some(email)) if email != current_email => {
                self.emails.remove(&current_email);
            }
            (None, Some(email)) => {
                self.emails.remove_if(&email, |_, owner| *owner == id);
            }
            _ => {}
        }
        Ok(updated)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<bool> {
        Ok(self
            .members
            .get_mut(&id)
            .map(|mut m| {
                m.password_hash = password_hash.to_string();
                m.updated_at = Utc::now();
            })
            .is_some())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        match self.members.remove(&id) {
            Some((_, member)) => {
                self.emails.remove_if(&member.email, |_, owner| *owner == id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(
        &self,
        filter: &MemberFilter,
        page: PageRequest,
    ) -> AppResult<PageResponse<Member>> {
        let mut members: Vec<Member> = self
            .members
            .iter()
            .filter(|m| matches(m.value(), filter))
            .map(|m| m.value().clone())
            .collect();
        members.sort_by(|a, b| b.join_date.cmp(&a.join_date));
        Ok(paginate(members, page))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.members.len() as u64)
    }
}
