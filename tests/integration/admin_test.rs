//! Integration tests for the staff gate and admin member management.

use chapel_entity::member::MemberRole;
use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_route_forbidden_for_member_allowed_for_staff() {
    let app = TestApp::new();
    let member = app
        .member_token("pew@x.org", MemberRole::Member, &[])
        .await;
    let staff = app
        .member_token("office@x.org", MemberRole::Staff, &[])
        .await;

    let denied = app
        .request("GET", "/api/admin/members", None, Some(&member))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.body["error"], "FORBIDDEN");

    let allowed = app
        .request("GET", "/api/admin/members", None, Some(&staff))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert_eq!(allowed.data()["total_items"], 2);
}

#[tokio::test]
async fn test_non_staff_roles_are_denied() {
    let app = TestApp::new();
    for (i, role) in [MemberRole::Usher, MemberRole::Choir, MemberRole::Deacon]
        .into_iter()
        .enumerate()
    {
        let token = app
            .member_token(&format!("role{i}@x.org"), role, &[])
            .await;
        let response = app
            .request("GET", "/api/admin/roles", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{role} got through");
    }
}

#[tokio::test]
async fn test_role_catalogue() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;

    let response = app
        .request("GET", "/api/admin/roles", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let roles = response.data().as_array().unwrap();
    assert_eq!(roles.len(), 6);
    assert!(
        roles
            .iter()
            .any(|r| r["role"] == "Staff" && r["is_staff"] == true)
    );
    assert!(
        roles
            .iter()
            .any(|r| r["role"] == "Choir" && r["is_staff"] == false)
    );
}

#[tokio::test]
async fn test_member_lifecycle() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;

    let created = app
        .request(
            "POST",
            "/api/admin/members",
            Some(json!({
                "email": "New@X.org",
                "password": "Welcome123",
                "first_name": "Nia",
                "last_name": "Newcomer",
                "role": "Choir",
                "departments": ["choir"],
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["email"], "new@x.org");
    let id = created.data()["id"].as_str().unwrap().to_string();

    let choir = app
        .request("GET", "/api/admin/members?role=Choir", None, Some(&admin))
        .await;
    assert_eq!(choir.status, StatusCode::OK);
    assert_eq!(choir.data()["total_items"], 1);

    let promoted = app
        .request(
            "PUT",
            &format!("/api/admin/members/{id}/role"),
            Some(json!({ "role": "Deacon" })),
            Some(&admin),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.data()["role"], "Deacon");

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/members/{id}"),
            Some(json!({ "phone": "555-0100" })),
            Some(&admin),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["phone"], "555-0100");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/members/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request(
            "GET",
            &format!("/api/admin/members/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_cannot_demote_self() {
    let app = TestApp::new();
    let admin_id = app
        .create_member("self@x.org", MemberRole::Admin, &[])
        .await;
    let admin = app.login("self@x.org", crate::helpers::PASSWORD).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/members/{admin_id}/role"),
            Some(json!({ "role": "Member" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_attendance_form_url() {
    let app = TestApp::new();
    let admin = app
        .member_token("admin@x.org", MemberRole::Admin, &[])
        .await;
    let member = app
        .member_token("pew@x.org", MemberRole::Member, &[])
        .await;

    let unset = app
        .request("GET", "/api/attendance/form-url", None, Some(&member))
        .await;
    assert_eq!(unset.status, StatusCode::NOT_FOUND);
    assert_eq!(unset.body["message"], "No attendance form configured");

    let bad = app
        .request(
            "PUT",
            "/api/admin/attendance/form-url",
            Some(json!({ "google_form_url": "not a url" })),
            Some(&admin),
        )
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let set = app
        .request(
            "PUT",
            "/api/admin/attendance/form-url",
            Some(json!({ "google_form_url": "https://forms.example.org/sunday" })),
            Some(&admin),
        )
        .await;
    assert_eq!(set.status, StatusCode::OK);

    let read = app
        .request("GET", "/api/attendance/form-url", None, Some(&member))
        .await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(
        read.data()["google_form_url"],
        "https://forms.example.org/sunday"
    );
}
