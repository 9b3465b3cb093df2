//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;

pub use auth::{ActiveMember, AuthMember, StaffContext, StaffMember};
pub use json::{JsonBody, QueryParams, ValidatedJson};
pub use pagination::PaginationParams;
