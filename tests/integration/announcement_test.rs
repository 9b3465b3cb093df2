//! Integration tests for audience-filtered announcements.

use chapel_entity::member::MemberRole;
use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

async fn publish(app: &TestApp, admin: &str, body: Value) -> String {
    let response = app
        .request("POST", "/api/admin/announcements", Some(body), Some(admin))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_unpublished_hidden_from_member_listing_even_for_admin() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;

    publish(
        &app,
        &admin,
        json!({ "title": "Live", "content": "Service at ten", "is_published": true }),
    )
    .await;
    let draft = publish(
        &app,
        &admin,
        json!({ "title": "Draft", "content": "Not yet", "is_published": false }),
    )
    .await;

    let member_view = app
        .request("GET", "/api/announcements", None, Some(&admin))
        .await;
    assert_eq!(member_view.status, StatusCode::OK);
    assert_eq!(member_view.titles(), vec!["Live".to_string()]);

    let single = app
        .request(
            "GET",
            &format!("/api/announcements/{draft}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(single.status, StatusCode::FORBIDDEN);

    let admin_view = app
        .request("GET", "/api/admin/announcements", None, Some(&admin))
        .await;
    assert_eq!(admin_view.status, StatusCode::OK);
    assert_eq!(admin_view.data()["total_items"], 2);

    let published_only = app
        .request(
            "GET",
            "/api/admin/announcements?published_only=true",
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(published_only.titles(), vec!["Live".to_string()]);
}

#[tokio::test]
async fn test_department_targeting() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let singer = app
        .member_token("singer@x.org", MemberRole::Choir, &["choir", "ushering"])
        .await;
    let tech = app
        .member_token("tech@x.org", MemberRole::Member, &["media"])
        .await;

    let id = publish(
        &app,
        &admin,
        json!({
            "title": "Rehearsal",
            "content": "Thursday at seven",
            "is_published": true,
            "target": "departments",
            "target_departments": ["choir"],
        }),
    )
    .await;

    let seen = app
        .request("GET", "/api/announcements", None, Some(&singer))
        .await;
    assert_eq!(seen.titles(), vec!["Rehearsal".to_string()]);

    let unseen = app
        .request("GET", "/api/announcements", None, Some(&tech))
        .await;
    assert!(unseen.titles().is_empty());

    let denied = app
        .request("GET", &format!("/api/announcements/{id}"), None, Some(&tech))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let missing = app
        .request(
            "GET",
            &format!("/api/announcements/{}", uuid::Uuid::new_v4()),
            None,
            Some(&tech),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_staff_target_and_expiry() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let member = app
        .member_token("pew@x.org", MemberRole::Member, &[])
        .await;

    publish(
        &app,
        &admin,
        json!({
            "title": "Staff meeting",
            "content": "Monday",
            "is_published": true,
            "target": "staff",
        }),
    )
    .await;
    let expired = (chrono::Utc::now() - chrono::Duration::hours(1)).to_rfc3339();
    publish(
        &app,
        &admin,
        json!({
            "title": "Old news",
            "content": "Yesterday",
            "is_published": true,
            "expires_at": expired,
        }),
    )
    .await;

    let member_view = app
        .request("GET", "/api/announcements", None, Some(&member))
        .await;
    assert!(member_view.titles().is_empty());

    let admin_view = app
        .request("GET", "/api/announcements", None, Some(&admin))
        .await;
    assert_eq!(admin_view.titles(), vec!["Staff meeting".to_string()]);
}

#[tokio::test]
async fn test_priority_filter_and_update() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;

    let id = publish(
        &app,
        &admin,
        json!({ "title": "Urgent", "content": "Roof leak", "is_published": true, "priority": "high" }),
    )
    .await;
    publish(
        &app,
        &admin,
        json!({ "title": "Routine", "content": "Bulletin", "is_published": true }),
    )
    .await;

    let high = app
        .request("GET", "/api/announcements?priority=high", None, Some(&admin))
        .await;
    assert_eq!(high.titles(), vec!["Urgent".to_string()]);

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/announcements/{id}"),
            Some(json!({ "is_published": false })),
            Some(&admin),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let after = app
        .request("GET", "/api/announcements", None, Some(&admin))
        .await;
    assert_eq!(after.titles(), vec!["Routine".to_string()]);
}

#[tokio::test]
async fn test_page_far_past_the_end_is_empty() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    publish(
        &app,
        &admin,
        json!({ "title": "Only", "content": "One item", "is_published": true }),
    )
    .await;

    for path in [
        "/api/announcements?page=18446744073709551615&per_page=100",
        "/api/events?page=18446744073709551615&per_page=100",
        "/api/admin/announcements?page=18446744073709551615&per_page=100",
        "/api/admin/members?page=184467440737095516&per_page=100",
    ] {
        let response = app.request("GET", path, None, Some(&admin)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}: {:?}", response.body);
        assert!(response.titles().is_empty(), "{path}");
        assert_eq!(response.data()["items"], json!([]), "{path}");
    }
}
