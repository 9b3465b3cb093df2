//! Shared fixture for service tests: memory stores and cheap Argon2 params.

use std::sync::Arc;

use chapel_auth::{PasswordHasher, PasswordValidator, TokenService};
use chapel_cache::CacheManager;
use chapel_core::config::{AuthConfig, CacheConfig};
use chapel_database::Stores;
use chapel_entity::member::{CreateMember, Member, MemberRole, NotificationPreference};

use crate::{
    AdminMemberService, AnnouncementService, AttendanceService, AuthService, EventService,
    MemberService, PrayerService, RequestContext, TestimonyService,
};

pub(crate) struct Fixture {
    pub stores: Stores,
    pub hasher: Arc<PasswordHasher>,
    pub auth: AuthService,
    pub members: MemberService,
    pub admin_members: AdminMemberService,
    pub announcements: AnnouncementService,
    pub events: EventService,
    pub prayers: PrayerService,
    pub testimonies: TestimonyService,
    pub attendance: AttendanceService,
}

impl Fixture {
    pub const PASSWORD: &'static str = "Password123";

    pub fn new() -> Self {
        let config = AuthConfig {
            jwt_secret: "service-tests-secret-that-is-long-enough".into(),
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
            ..AuthConfig::default()
        };
        let stores = Stores::memory();
        let cache = CacheManager::new(&CacheConfig::default());
        let hasher = Arc::new(PasswordHasher::new(&config).unwrap());
        let validator = Arc::new(PasswordValidator::new(&config));
        let tokens = Arc::new(TokenService::new(&config));

        Self {
            auth: AuthService::new(
                stores.members.clone(),
                hasher.clone(),
                validator.clone(),
                tokens,
            ),
            members: MemberService::new(stores.members.clone()),
            admin_members: AdminMemberService::new(
                stores.members.clone(),
                hasher.clone(),
                validator,
            ),
            announcements: AnnouncementService::new(stores.announcements.clone()),
            events: EventService::new(stores.events.clone()),
            prayers: PrayerService::new(stores.sharing.clone()),
            testimonies: TestimonyService::new(stores.sharing.clone()),
            attendance: AttendanceService::new(stores.settings.clone(), cache),
            hasher,
            stores,
        }
    }

    /// Inserts an active member whose password is [`Self::PASSWORD`].
    pub async fn member(&self, email: &str, role: MemberRole) -> Member {
        self.member_in(email, role, &[]).await
    }

    pub async fn member_in(&self, email: &str, role: MemberRole, departments: &[&str]) -> Member {
        self.stores
            .members
            .create(CreateMember {
                first_name: "Test".into(),
                last_name: role.to_string(),
                email: email.into(),
                phone: None,
                password_hash: self.hasher.hash(Self::PASSWORD).unwrap(),
                role,
                is_active: true,
                departments: departments.iter().map(|d| d.to_string()).collect(),
                notification_preference: NotificationPreference::Both,
                sms_opt_in: false,
            })
            .await
            .unwrap()
    }

    pub async fn ctx(&self, email: &str, role: MemberRole) -> RequestContext {
        RequestContext::new(self.member(email, role).await)
    }
}
