//! Route definitions for the Chapel HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let server = &config.server;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(member_routes())
        .merge(announcement_routes())
        .merge(event_routes())
        .merge(sharing_routes())
        .merge(attendance_routes())
        .merge(admin_routes(state.clone()))
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, login, current member, password, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/update-password", put(handlers::auth::update_password))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Member self-service
fn member_routes() -> Router<AppState> {
    Router::new().route(
        "/members/me",
        get(handlers::members::get_profile).put(handlers::members::update_profile),
    )
}

/// Audience-filtered announcements
fn announcement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/announcements",
            get(handlers::announcements::list_announcements),
        )
        .route(
            "/announcements/{id}",
            get(handlers::announcements::get_announcement),
        )
}

/// Audience-filtered events, RSVP and volunteering
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::events::list_events))
        .route("/events/{id}", get(handlers::events::get_event))
        .route("/events/{id}/register", post(handlers::events::register))
        .route("/events/{id}/volunteer", post(handlers::events::volunteer))
}

/// Prayer requests and testimonies
fn sharing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/prayer-requests",
            get(handlers::sharing::list_prayers).post(handlers::sharing::submit_prayer),
        )
        .route("/prayer-requests/{id}/pray", post(handlers::sharing::pray))
        .route(
            "/prayer-requests/{id}/comments",
            post(handlers::sharing::comment_on_prayer),
        )
        .route(
            "/testimonies",
            get(handlers::sharing::list_testimonies).post(handlers::sharing::submit_testimony),
        )
        .route(
            "/testimonies/{id}/comments",
            post(handlers::sharing::comment_on_testimony),
        )
}

/// Attendance form lookup
fn attendance_routes() -> Router<AppState> {
    Router::new().route("/attendance/form-url", get(handlers::attendance::form_url))
}

/// Admin and Staff only. The gate runs before any admin handler.
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Members
        .route(
            "/admin/members",
            get(handlers::admin::members::list_members)
                .post(handlers::admin::members::create_member),
        )
        .route(
            "/admin/members/{id}",
            get(handlers::admin::members::get_member)
                .put(handlers::admin::members::update_member)
                .delete(handlers::admin::members::delete_member),
        )
        .route(
            "/admin/members/{id}/role",
            put(handlers::admin::members::change_role),
        )
        .route(
            "/admin/members/{id}/status",
            put(handlers::admin::members::change_status),
        )
        .route("/admin/roles", get(handlers::admin::members::list_roles))
        // Announcements
        .route(
            "/admin/announcements",
            get(handlers::admin::announcements::list_announcements)
                .post(handlers::admin::announcements::create_announcement),
        )
        .route(
            "/admin/announcements/{id}",
            get(handlers::admin::announcements::get_announcement)
                .put(handlers::admin::announcements::update_announcement)
                .delete(handlers::admin::announcements::delete_announcement),
        )
        // Events
        .route(
            "/admin/events",
            get(handlers::admin::events::list_events).post(handlers::admin::events::create_event),
        )
        .route(
            "/admin/events/{id}",
            get(handlers::admin::events::get_event)
                .put(handlers::admin::events::update_event)
                .delete(handlers::admin::events::delete_event),
        )
        .route(
            "/admin/events/{id}/registrations",
            get(handlers::admin::events::list_registrations),
        )
        .route(
            "/admin/events/{id}/volunteers",
            get(handlers::admin::events::list_volunteers),
        )
        // Prayer requests and testimonies
        .route(
            "/admin/prayer-requests",
            get(handlers::admin::sharing::list_prayers),
        )
        .route(
            "/admin/prayer-requests/{id}/approve",
            put(handlers::admin::sharing::approve_prayer),
        )
        .route(
            "/admin/testimonies",
            get(handlers::admin::sharing::list_testimonies),
        )
        .route(
            "/admin/testimonies/{id}/moderate",
            put(handlers::admin::sharing::moderate_testimony),
        )
        // Attendance
        .route(
            "/admin/attendance/form-url",
            get(handlers::admin::attendance::get_settings)
                .put(handlers::admin::attendance::set_form_url),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::rbac::require_staff,
        ))
}

/// Health check (no auth)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
