//! Integration tests for registration and login.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_then_duplicate_conflicts() {
    let Some(app) = TestApp::try_new().await else { return };

    let first = app.register("alice", "Secr3tPwd").await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["username"].as_str().unwrap(), "alice");
    assert_eq!(first.body["role"].as_str().unwrap(), "user");

    let second = app.register("alice", "Other1Pwd").await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"].as_str().unwrap(), "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let Some(app) = TestApp::try_new().await else { return };

    let response = app.register("bob", "alllowercase").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.register("bob", "Ab1").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_short_username() {
    let Some(app) = TestApp::try_new().await else { return };

    let response = app.register("ab", "Secr3tPwd").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let Some(app) = TestApp::try_new().await else { return };

    app.register("carol", "Secr3tPwd").await;

    let ok = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "carol",
                "password": "Secr3tPwd",
            })),
            None,
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.body["access_token"].as_str().is_some());
    assert_eq!(ok.body["token_type"].as_str().unwrap(), "bearer");

    let bad_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "carol",
                "password": "wrong",
            })),
            None,
        )
        .await;
    assert_eq!(bad_password.status, StatusCode::UNAUTHORIZED);

    let unknown_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "Secr3tPwd",
            })),
            None,
        )
        .await;
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let Some(app) = TestApp::try_new().await else { return };

    app.register("dave", "Secr3tPwd").await;
    let token = app.login("dave", "Secr3tPwd").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["username"].as_str().unwrap(), "dave");

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_change_requires_admin() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin_token = app.create_admin("root", "Adm1nPwd!").await;
    let user = app.register("erin", "Secr3tPwd").await;
    let user_id = user.body["id"].as_str().unwrap().to_string();
    let user_token = app.login("erin", "Secr3tPwd").await;

    // A regular user cannot change roles.
    let forbidden = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}/role"),
            Some(serde_json::json!({"role": "admin"})),
            Some(&user_token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    // An admin can.
    let promoted = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}/role"),
            Some(serde_json::json!({"role": "admin"})),
            Some(&admin_token),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["role"].as_str().unwrap(), "admin");
}

#[tokio::test]
async fn test_user_list_is_admin_only() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin_token = app.create_admin("root", "Adm1nPwd!").await;
    app.register("frank", "Secr3tPwd").await;
    let user_token = app.login("frank", "Secr3tPwd").await;

    let forbidden = app.request("GET", "/api/users", None, Some(&user_token)).await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let listed = app.request("GET", "/api/users", None, Some(&admin_token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["items"].as_array().unwrap().len(), 2);
}
