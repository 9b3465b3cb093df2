//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use chapel_api::AppState;
use chapel_auth::PasswordHasher;
use chapel_core::config::{AppConfig, DatabaseBackend};
use chapel_database::Stores;
use chapel_entity::member::{CreateMember, MemberRole, NotificationPreference};

/// Password used for every seeded member.
pub const PASSWORD: &str = "Secret123!";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store handles for direct seeding
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory backend
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Like [`TestApp::new`], with a chance to adjust the config first
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-tests-secret-that-is-long-enough".to_string();
        config.auth.argon2_memory_kib = 1024;
        config.auth.argon2_iterations = 1;
        config.database.backend = DatabaseBackend::Memory;
        adjust(&mut config);
        config.validate().expect("test config is valid");

        let stores = Stores::memory();
        let state = AppState::new(config.clone(), stores.clone()).expect("Failed to build state");
        let router = chapel_api::build_app(state);

        Self {
            router,
            stores,
            config,
        }
    }

    /// Seed an active member directly in the store and return their ID
    pub async fn create_member(&self, email: &str, role: MemberRole, departments: &[&str]) -> Uuid {
        let hasher = PasswordHasher::new(&self.config.auth).expect("hasher");
        let password_hash = hasher.hash(PASSWORD).expect("Failed to hash password");
        let member = self
            .stores
            .members
            .create(CreateMember {
                first_name: "Test".to_string(),
                last_name: role.to_string(),
                email: email.to_string(),
                phone: None,
                password_hash,
                role,
                is_active: true,
                departments: departments.iter().map(|d| d.to_string()).collect(),
                notification_preference: NotificationPreference::Both,
                sms_opt_in: false,
            })
            .await
            .expect("Failed to create test member");
        member.id
    }

    /// Seed a member and log them in, returning the access token
    pub async fn member_token(&self, email: &str, role: MemberRole, departments: &[&str]) -> String {
        self.create_member(email, role, departments).await;
        self.login(email, PASSWORD).await
    }

    /// Login and return the bearer access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        let body = match body {
            Some(b) => {
                req = req.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// Titles of the items in a paged `data` payload
    pub fn titles(&self) -> Vec<String> {
        self.data()["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i["title"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
