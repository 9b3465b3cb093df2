//! Integration tests for registration, login, and token lifecycle.

use chapel_entity::member::MemberRole;
use http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp};

fn registration(email: &str, password: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": password,
        "first_name": "Ada",
        "last_name": "Member",
    })
}

#[tokio::test]
async fn test_register_login_and_duplicate_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration("a@x.org", "Secret123!")),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["member"]["role"], "Member");
    assert_eq!(response.data()["token_type"], "bearer");
    assert!(response.data()["member"].get("password_hash").is_none());

    let token = app.login("a@x.org", "Secret123!").await;
    assert!(!token.is_empty());

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.org", "password": "Wrong123!" })),
            None,
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["message"], "Invalid credentials");

    let duplicate = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration("a@x.org", "Another123!")),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.body["message"], "Email already registered");
}

#[tokio::test]
async fn test_duplicate_email_ignores_case() {
    let app = TestApp::new();
    app.request(
        "POST",
        "/api/auth/register",
        Some(registration("case@x.org", "Secret123!")),
        None,
    )
    .await;

    let duplicate = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration("  Case@X.org ", "Secret123!")),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@x.org", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_short_password_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(registration("short@x.org", "abc")),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();

    let anonymous = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let token = app
        .member_token("me@x.org", MemberRole::Member, &[])
        .await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.data()["email"], "me@x.org");
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::new();
    let token = app
        .member_token("bye@x.org", MemberRole::Member, &[])
        .await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let after = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
    assert_eq!(after.body["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_logout_holds_beyond_cache_capacity() {
    let app = TestApp::with_config(|config| config.cache.max_capacity = 10);
    app.create_member("many@x.org", MemberRole::Member, &[]).await;

    let mut revoked = Vec::new();
    for _ in 0..40 {
        let token = app.login("many@x.org", PASSWORD).await;
        let logout = app
            .request("POST", "/api/auth/logout", None, Some(&token))
            .await;
        assert_eq!(logout.status, StatusCode::OK);
        revoked.push(token);
    }

    for token in &revoked {
        let after = app.request("GET", "/api/auth/me", None, Some(token)).await;
        assert_eq!(after.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let token = app
        .member_token("pw@x.org", MemberRole::Member, &[])
        .await;

    let wrong = app
        .request(
            "PUT",
            "/api/auth/update-password",
            Some(json!({ "current_password": "Nope12345", "new_password": "Fresh12345" })),
            Some(&token),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong.body["message"], "Current password is incorrect");

    let ok = app
        .request(
            "PUT",
            "/api/auth/update-password",
            Some(json!({ "current_password": PASSWORD, "new_password": "Fresh12345" })),
            Some(&token),
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);

    app.login("pw@x.org", "Fresh12345").await;
}

#[tokio::test]
async fn test_inactive_member_is_distinct_from_unauthorized() {
    let app = TestApp::new();
    let admin = app
        .member_token("boss@x.org", MemberRole::Admin, &[])
        .await;
    let member_id = app
        .create_member("sleepy@x.org", MemberRole::Member, &[])
        .await;
    let member = app.login("sleepy@x.org", PASSWORD).await;

    let deactivate = app
        .request(
            "PUT",
            &format!("/api/admin/members/{member_id}/status"),
            Some(json!({ "is_active": false })),
            Some(&admin),
        )
        .await;
    assert_eq!(deactivate.status, StatusCode::OK);

    let profile = app
        .request("GET", "/api/members/me", None, Some(&member))
        .await;
    assert_eq!(profile.status, StatusCode::FORBIDDEN);
    assert_eq!(profile.body["error"], "ACCOUNT_INACTIVE");

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "sleepy@x.org", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::FORBIDDEN);
    assert_eq!(login.body["error"], "ACCOUNT_INACTIVE");

    // Me only needs a resolvable member.
    let me = app.request("GET", "/api/auth/me", None, Some(&member)).await;
    assert_eq!(me.status, StatusCode::OK);
}
