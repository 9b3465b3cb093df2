//! PostgreSQL implementations of the store traits.

pub mod announcement;
pub mod event;
pub mod member;
pub mod settings;
pub mod sharing;

pub use announcement::AnnouncementRepository;
pub use event::EventRepository;
pub use member::MemberRepository;
pub use settings::SettingsRepository;
pub use sharing::SharingRepository;

use chapel_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error as a database error with `context`.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

/// Whether `err` is a unique violation of `constraint`.
pub(crate) fn violates(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.constraint() == Some(constraint))
}
