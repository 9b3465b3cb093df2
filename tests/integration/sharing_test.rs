//! Integration tests for prayer requests and testimonies.

use chapel_entity::member::MemberRole;
use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_prayer_request_approval_flow() {
    let app = TestApp::new();
    let admin = app
        .member_token("pastor@x.org", MemberRole::Admin, &[])
        .await;
    let author = app
        .member_token("author@x.org", MemberRole::Member, &[])
        .await;
    let friend = app
        .member_token("friend@x.org", MemberRole::Member, &[])
        .await;

    let submitted = app
        .request(
            "POST",
            "/api/prayer-requests",
            Some(json!({ "content": "Pray for my mother's surgery" })),
            Some(&author),
        )
        .await;
    assert_eq!(submitted.status, StatusCode::CREATED);
    assert_eq!(submitted.data()["is_approved"], false);
    let id = submitted.data()["id"].as_str().unwrap().to_string();

    let listed = app
        .request("GET", "/api/prayer-requests", None, Some(&friend))
        .await;
    assert_eq!(listed.data()["total_items"], 0);

    let early = app
        .request(
            "POST",
            &format!("/api/prayer-requests/{id}/pray"),
            Some(json!({})),
            Some(&friend),
        )
        .await;
    assert_eq!(early.status, StatusCode::NOT_FOUND);

    let own = app
        .request(
            "POST",
            &format!("/api/prayer-requests/{id}/pray"),
            Some(json!({})),
            Some(&author),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.data()["prayer_count"], 1);

    let approved = app
        .request(
            "PUT",
            &format!("/api/admin/prayer-requests/{id}/approve"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(approved.data()["is_approved"], true);

    let prayed = app
        .request(
            "POST",
            &format!("/api/prayer-requests/{id}/pray"),
            Some(json!({ "increment": 3 })),
            Some(&friend),
        )
        .await;
    assert_eq!(prayed.data()["prayer_count"], 4);

    let comment = app
        .request(
            "POST",
            &format!("/api/prayer-requests/{id}/comments"),
            Some(json!({ "text": "Praying with you" })),
            Some(&friend),
        )
        .await;
    assert_eq!(comment.status, StatusCode::CREATED);

    let listed = app
        .request("GET", "/api/prayer-requests", None, Some(&friend))
        .await;
    assert_eq!(listed.data()["total_items"], 1);
    assert_eq!(
        listed.data()["items"][0]["comments"][0]["text"],
        "Praying with you"
    );
}

#[tokio::test]
async fn test_private_prayer_request_stays_unlisted() {
    let app = TestApp::new();
    let admin = app
        .member_token("pastor@x.org", MemberRole::Admin, &[])
        .await;
    let author = app
        .member_token("quiet@x.org", MemberRole::Member, &[])
        .await;

    let submitted = app
        .request(
            "POST",
            "/api/prayer-requests",
            Some(json!({ "content": "Private need", "is_public": false })),
            Some(&author),
        )
        .await;
    let id = submitted.data()["id"].as_str().unwrap().to_string();

    app.request(
        "PUT",
        &format!("/api/admin/prayer-requests/{id}/approve"),
        None,
        Some(&admin),
    )
    .await;

    let listed = app
        .request("GET", "/api/prayer-requests", None, Some(&author))
        .await;
    assert_eq!(listed.data()["total_items"], 0);

    let all = app
        .request("GET", "/api/admin/prayer-requests", None, Some(&admin))
        .await;
    assert_eq!(all.data()["total_items"], 1);
}

#[tokio::test]
async fn test_testimony_moderation() {
    let app = TestApp::new();
    let staff = app
        .member_token("office@x.org", MemberRole::Staff, &[])
        .await;
    let member = app
        .member_token("witness@x.org", MemberRole::Member, &[])
        .await;

    let submitted = app
        .request(
            "POST",
            "/api/testimonies",
            Some(json!({ "content": "God provided a job" })),
            Some(&member),
        )
        .await;
    assert_eq!(submitted.status, StatusCode::CREATED);
    let id = submitted.data()["id"].as_str().unwrap().to_string();

    let before = app
        .request("GET", "/api/testimonies", None, Some(&member))
        .await;
    assert_eq!(before.data()["total_items"], 0);

    let forbidden = app
        .request(
            "PUT",
            &format!("/api/admin/testimonies/{id}/moderate"),
            Some(json!({ "action": "approve" })),
            Some(&member),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let edited = app
        .request(
            "PUT",
            &format!("/api/admin/testimonies/{id}/moderate"),
            Some(json!({ "action": "edit", "content": "God provided a new job" })),
            Some(&staff),
        )
        .await;
    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.data()["content"], "God provided a new job");

    let approved = app
        .request(
            "PUT",
            &format!("/api/admin/testimonies/{id}/moderate"),
            Some(json!({ "action": "approve" })),
            Some(&staff),
        )
        .await;
    assert_eq!(approved.data()["is_approved"], true);

    let after = app
        .request("GET", "/api/testimonies", None, Some(&member))
        .await;
    assert_eq!(after.data()["total_items"], 1);

    let rejected = app
        .request(
            "PUT",
            &format!("/api/admin/testimonies/{id}/moderate"),
            Some(json!({ "action": "reject" })),
            Some(&staff),
        )
        .await;
    assert_eq!(rejected.data()["is_approved"], false);
}
