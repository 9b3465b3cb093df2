//! Prayer requests and testimonies.

pub mod prayer;
pub mod testimony;

pub use prayer::{CommentRequest, PrayRequest, PrayerService, SubmitPrayerRequest};
pub use testimony::{SubmitTestimonyRequest, TestimonyService};
