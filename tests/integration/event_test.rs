//! Integration tests for events, RSVPs, and volunteer signups.

use chapel_entity::member::MemberRole;
use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn event(title: &str, extra: Value) -> Value {
    let start = Utc::now() + Duration::days(7);
    let mut body = json!({
        "title": title,
        "description": "All welcome",
        "start_time": start.to_rfc3339(),
        "end_time": (start + Duration::hours(2)).to_rfc3339(),
        "location": "Fellowship hall",
        "is_published": true,
    });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }
    body
}

async fn create(app: &TestApp, admin: &str, body: Value) -> String {
    let response = app
        .request("POST", "/api/admin/events", Some(body), Some(admin))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_rsvp_capacity_and_duplicates() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let first = app
        .member_token("first@x.org", MemberRole::Member, &[])
        .await;
    let second = app
        .member_token("second@x.org", MemberRole::Member, &[])
        .await;

    let id = create(
        &app,
        &admin,
        event(
            "Retreat",
            json!({ "registration_required": true, "max_attendees": 1 }),
        ),
    )
    .await;
    let path = format!("/api/events/{id}/register");

    let ok = app.request("POST", &path, None, Some(&first)).await;
    assert_eq!(ok.status, StatusCode::CREATED);

    let again = app.request("POST", &path, None, Some(&first)).await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "Already registered for this event");

    let full = app.request("POST", &path, None, Some(&second)).await;
    assert_eq!(full.status, StatusCode::BAD_REQUEST);
    assert_eq!(full.body["message"], "Event is full");

    let roster = app
        .request(
            "GET",
            &format!("/api/admin/events/{id}/registrations"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(roster.status, StatusCode::OK);
    assert_eq!(roster.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rsvp_rejected_when_not_required() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let member = app
        .member_token("pew@x.org", MemberRole::Member, &[])
        .await;

    let id = create(&app, &admin, event("Sunday service", json!({}))).await;
    let response = app
        .request(
            "POST",
            &format!("/api/events/{id}/register"),
            None,
            Some(&member),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Registration not required for this event"
    );
}

#[tokio::test]
async fn test_volunteer_roles() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let member = app
        .member_token("helper@x.org", MemberRole::Member, &[])
        .await;

    let id = create(
        &app,
        &admin,
        event(
            "Food drive",
            json!({ "volunteers_needed": true, "volunteer_roles": ["driver", "packer"] }),
        ),
    )
    .await;
    let path = format!("/api/events/{id}/volunteer");

    let invalid = app
        .request("POST", &path, Some(json!({ "role": "juggler" })), Some(&member))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["message"], "Invalid volunteer role");

    let ok = app
        .request("POST", &path, Some(json!({ "role": "driver" })), Some(&member))
        .await;
    assert_eq!(ok.status, StatusCode::CREATED);

    let again = app
        .request("POST", &path, Some(json!({ "role": "driver" })), Some(&member))
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);

    let volunteers = app
        .request(
            "GET",
            &format!("/api/admin/events/{id}/volunteers"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(volunteers.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_event_audience_and_unpublished() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let member = app
        .member_token("pew@x.org", MemberRole::Member, &["media"])
        .await;

    create(&app, &admin, event("Open house", json!({}))).await;
    let draft = create(
        &app,
        &admin,
        event("Planning", json!({ "is_published": false })),
    )
    .await;
    create(
        &app,
        &admin,
        event(
            "Choir social",
            json!({ "target": "departments", "target_departments": ["choir"] }),
        ),
    )
    .await;

    let listed = app
        .request("GET", "/api/events", None, Some(&member))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.titles(), vec!["Open house".to_string()]);

    let hidden = app
        .request("GET", &format!("/api/events/{draft}"), None, Some(&member))
        .await;
    assert_eq!(hidden.status, StatusCode::FORBIDDEN);

    let everything = app
        .request("GET", "/api/admin/events", None, Some(&admin))
        .await;
    assert_eq!(everything.data()["total_items"], 3);

    let anonymous = app.request("GET", "/api/events", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_end_before_start_rejected() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let start = Utc::now() + Duration::days(2);

    let response = app
        .request(
            "POST",
            "/api/admin/events",
            Some(event(
                "Backwards",
                json!({
                    "start_time": start.to_rfc3339(),
                    "end_time": (start - Duration::hours(1)).to_rfc3339(),
                }),
            )),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clearing_expiry_brings_event_back() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let member = app
        .member_token("m@x.org", MemberRole::Member, &[])
        .await;

    let lapsed = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let id = create(&app, &admin, event("Picnic", json!({ "expires_at": lapsed }))).await;

    let before = app.request("GET", "/api/events", None, Some(&member)).await;
    assert!(before.titles().is_empty());

    let conflicting = app
        .request(
            "PUT",
            &format!("/api/admin/events/{id}"),
            Some(json!({ "expires_at": lapsed, "clear_expiry": true })),
            Some(&admin),
        )
        .await;
    assert_eq!(conflicting.status, StatusCode::BAD_REQUEST);

    let cleared = app
        .request(
            "PUT",
            &format!("/api/admin/events/{id}"),
            Some(json!({ "clear_expiry": true })),
            Some(&admin),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK, "{:?}", cleared.body);
    assert_eq!(cleared.data()["expires_at"], Value::Null);

    let after = app.request("GET", "/api/events", None, Some(&member)).await;
    assert_eq!(after.titles(), vec!["Picnic".to_string()]);
}
