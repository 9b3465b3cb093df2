//! Member self-service and administrative member management.

pub mod admin;
pub mod service;

pub use admin::{AdminCreateMemberRequest, AdminMemberService, AdminUpdateMemberRequest, RoleInfo};
pub use service::{MemberService, UpdateProfileRequest};
