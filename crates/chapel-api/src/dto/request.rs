//! Request DTOs not owned by a service.

use serde::Deserialize;

use chapel_core::types::PageRequest;
use chapel_database::MemberFilter;
use chapel_entity::announcement::AnnouncementPriority;
use chapel_entity::member::MemberRole;
use chapel_service::announcement::AnnouncementQuery;

use crate::extractors::PaginationParams;

/// `GET /api/announcements` query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementListQuery {
    /// Page number.
    pub page: Option<u64>,
    /// Page size.
    pub per_page: Option<u64>,
    /// Only this priority.
    pub priority: Option<AnnouncementPriority>,
}

impl AnnouncementListQuery {
    /// Splits into the service filter and page request.
    pub fn split(&self) -> (AnnouncementQuery, PageRequest) {
        let page = PaginationParams {
            page: self.page,
            per_page: self.per_page,
        };
        (
            AnnouncementQuery {
                priority: self.priority,
            },
            page.page_request(),
        )
    }
}

/// Staff listing query with the `published_only` switch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminListQuery {
    /// Page number.
    pub page: Option<u64>,
    /// Page size.
    pub per_page: Option<u64>,
    /// Hide drafts.
    #[serde(default)]
    pub published_only: bool,
}

impl AdminListQuery {
    /// The page request.
    pub fn page_request(&self) -> PageRequest {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
        .page_request()
    }
}

/// `GET /api/admin/members` query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberListQuery {
    /// Page number.
    pub page: Option<u64>,
    /// Page size.
    pub per_page: Option<u64>,
    /// Only this role.
    pub role: Option<MemberRole>,
    /// Name or email substring.
    pub search: Option<String>,
}

impl MemberListQuery {
    /// Splits into the store filter and page request.
    pub fn split(self) -> (MemberFilter, PageRequest) {
        let page = PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
        .page_request();
        let search = self.search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        (
            MemberFilter {
                role: self.role,
                search,
            },
            page,
        )
    }
}

/// `PUT /api/admin/members/{id}/role` body.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleChangeRequest {
    /// New role; one of the fixed catalogue.
    pub role: MemberRole,
}

/// `PUT /api/admin/members/{id}/status` body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChangeRequest {
    /// New active flag.
    pub is_active: bool,
}
