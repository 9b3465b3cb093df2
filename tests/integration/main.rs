//! End-to-end tests driving the full router against the in-memory backend.

mod helpers;

mod admin_test;
mod announcement_test;
mod auth_test;
mod event_test;
mod sharing_test;
