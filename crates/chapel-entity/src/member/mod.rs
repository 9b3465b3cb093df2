//! Member domain entities.

pub mod model;
pub mod preference;
pub mod role;

pub use model::{CreateMember, Member, MemberProfile, UpdateMember};
pub use preference::NotificationPreference;
pub use role::MemberRole;
