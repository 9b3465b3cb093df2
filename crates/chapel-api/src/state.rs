//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chapel_auth::{AuthResolver, PasswordHasher, PasswordValidator, TokenService};
use chapel_cache::CacheManager;
use chapel_core::config::AppConfig;
use chapel_core::error::AppError;
use chapel_database::Stores;
use chapel_service::{
    AdminMemberService, AnnouncementService, AttendanceService, AuthService, EventService,
    MemberService, PrayerService, TestimonyService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Validated application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store handles (PostgreSQL or in-memory)
    pub stores: Stores,
    /// In-process cache
    pub cache: CacheManager,

    // ── Auth ─────────────────────────────────────────────────
    /// Bearer token to member resolver
    pub resolver: Arc<AuthResolver>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login, password, logout
    pub auth_service: Arc<AuthService>,
    /// Member self-service
    pub member_service: Arc<MemberService>,
    /// Admin member management
    pub admin_member_service: Arc<AdminMemberService>,
    /// Announcements
    pub announcement_service: Arc<AnnouncementService>,
    /// Events, RSVPs, volunteering
    pub event_service: Arc<EventService>,
    /// Prayer requests
    pub prayer_service: Arc<PrayerService>,
    /// Testimonies
    pub testimony_service: Arc<TestimonyService>,
    /// Attendance form settings
    pub attendance_service: Arc<AttendanceService>,
}

impl AppState {
    /// Wires every service from the configuration and the chosen stores.
    pub fn new(config: AppConfig, stores: Stores) -> Result<Self, AppError> {
        let cache = CacheManager::new(&config.cache);

        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let tokens = Arc::new(TokenService::new(&config.auth));
        let resolver = Arc::new(AuthResolver::new(
            Arc::clone(&tokens),
            Arc::clone(&stores.members),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.members),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            tokens,
        ));
        let member_service = Arc::new(MemberService::new(Arc::clone(&stores.members)));
        let admin_member_service = Arc::new(AdminMemberService::new(
            Arc::clone(&stores.members),
            password_hasher,
            password_validator,
        ));
        let announcement_service = Arc::new(AnnouncementService::new(Arc::clone(
            &stores.announcements,
        )));
        let event_service = Arc::new(EventService::new(Arc::clone(&stores.events)));
        let prayer_service = Arc::new(PrayerService::new(Arc::clone(&stores.sharing)));
        let testimony_service = Arc::new(TestimonyService::new(Arc::clone(&stores.sharing)));
        let attendance_service = Arc::new(AttendanceService::new(
            Arc::clone(&stores.settings),
            cache.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            stores,
            cache,
            resolver,
            auth_service,
            member_service,
            admin_member_service,
            announcement_service,
            event_service,
            prayer_service,
            testimony_service,
            attendance_service,
        })
    }
}
