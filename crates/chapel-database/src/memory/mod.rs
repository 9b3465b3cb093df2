//! In-memory implementations of the store traits.
//!
//! Backed by `dashmap`. Every listing applies its filter to the whole map
//! before slicing out the requested page, so pagination counts only rows the
//! caller may see. Data does not survive a restart.

mod announcement;
mod event;
mod member;
mod settings;
mod sharing;

use async_trait::async_trait;

use chapel_core::result::AppResult;
use chapel_core::types::{PageRequest, PageResponse};

pub use announcement::MemoryAnnouncementStore;
pub use event::MemoryEventStore;
pub use member::MemoryMemberStore;
pub use settings::MemorySettingsStore;
pub use sharing::MemorySharingStore;

use crate::store::StoreHealth;

/// Health probe for the in-memory backend; always up.
#[derive(Debug, Clone, Copy)]
pub struct MemoryHealth;

#[async_trait]
impl StoreHealth for MemoryHealth {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Slice one page out of an already filtered and sorted list.
pub(crate) fn paginate<T>(items: Vec<T>, page: PageRequest) -> PageResponse<T> {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
        .collect();
    PageResponse::new(items, page, total)
}
