//! Prayer requests, testimonies and their comment threads.

pub mod comment;
pub mod prayer;
pub mod testimony;

pub use comment::Comment;
pub use prayer::PrayerRequest;
pub use testimony::{ModerationAction, Testimony};
