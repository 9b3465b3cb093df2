//! SQL rendering of the audience predicate.
//!
//! Listing endpoints filter on the database side so that pagination runs
//! over visible rows only. The clause mirrors
//! [`chapel_entity::audience::Targeted::visibility`]:
//!
//! ```sql
//! is_published = TRUE
//! AND (expires_at IS NULL OR expires_at > $now)
//! AND (target IN ('all', 'members')
//!      OR (target = 'staff' AND $is_staff)
//!      OR (target = 'departments' AND target_departments && $departments))
//! ```

use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder};

use chapel_entity::audience::Viewer;

/// Append the audience predicate for `viewer` at `now` to `qb`.
///
/// The caller is responsible for the surrounding `WHERE`/`AND`.
pub fn push_visible_clause(qb: &mut QueryBuilder<'_, Postgres>, viewer: &Viewer, now: DateTime<Utc>) {
    qb.push("is_published = TRUE AND (expires_at IS NULL OR expires_at > ");
    qb.push_bind(now);
    qb.push(") AND (target IN ('all', 'members') OR (target = 'staff' AND ");
    qb.push_bind(viewer.is_staff());
    qb.push(") OR (target = 'departments' AND target_departments && ");
    qb.push_bind(viewer.departments.clone());
    qb.push("))");
}
