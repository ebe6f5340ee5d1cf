//! Integration tests for the chord catalog.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_creates_chord() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;

    let response = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({
                "name": "Am",
                "frets": [-1, 0, 2, 2, 1, 0],
                "description": "A minor, open position",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["id"].as_str().is_some());
    assert_eq!(response.body["name"].as_str().unwrap(), "Am");
    assert_eq!(
        response.body["frets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect::<Vec<_>>(),
        vec![-1, 0, 2, 2, 1, 0]
    );
}

#[tokio::test]
async fn test_regular_user_cannot_create_chord() {
    let Some(app) = TestApp::try_new().await else { return };

    app.register("gina", "Secr3tPwd").await;
    let token = app.login("gina", "Secr3tPwd").await;

    let response = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({
                "name": "C",
                "frets": [-1, 3, 2, 0, 1, 0],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_fret_shapes_rejected() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;

    // Five strings.
    let short = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({"name": "X1", "frets": [0, 2, 2, 1, 0]})),
            Some(&admin),
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    // Seven strings.
    let long = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({"name": "X2", "frets": [0, 2, 2, 1, 0, 0, 0]})),
            Some(&admin),
        )
        .await;
    assert_eq!(long.status, StatusCode::BAD_REQUEST);

    // Out of range.
    let high = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({"name": "X3", "frets": [0, 0, 0, 0, 0, 25]})),
            Some(&admin),
        )
        .await;
    assert_eq!(high.status, StatusCode::BAD_REQUEST);

    let low = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({"name": "X4", "frets": [-2, 0, 0, 0, 0, 0]})),
            Some(&admin),
        )
        .await;
    assert_eq!(low.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_chord_name_conflicts() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    app.create_chord(&admin, "Em", &[0, 2, 2, 0, 0, 0]).await;

    let duplicate = app
        .request(
            "POST",
            "/api/chords",
            Some(serde_json::json!({"name": "Em", "frets": [0, 2, 2, 0, 0, 0]})),
            Some(&admin),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_and_search_chords() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let am_id = app.create_chord(&admin, "Am7", &[-1, 0, 2, 0, 1, 0]).await;
    app.create_chord(&admin, "G", &[3, 2, 0, 0, 0, 3]).await;

    let got = app
        .request("GET", &format!("/api/chords/{am_id}"), None, Some(&admin))
        .await;
    assert_eq!(got.status, StatusCode::OK);
    assert_eq!(got.body["name"].as_str().unwrap(), "Am7");

    let missing = app
        .request(
            "GET",
            &format!("/api/chords/{}", Uuid::new_v4()),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    // Case-insensitive substring search.
    let found = app
        .request("GET", "/api/chords?search=am", None, Some(&admin))
        .await;
    assert_eq!(found.status, StatusCode::OK);
    let items = found.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"].as_str().unwrap(), "Am7");
}

#[tokio::test]
async fn test_delete_chord() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    app.register("henry", "Secr3tPwd").await;
    let user = app.login("henry", "Secr3tPwd").await;

    let chord_id = app.create_chord(&admin, "D", &[-1, -1, 0, 2, 3, 2]).await;

    let forbidden = app
        .request(
            "DELETE",
            &format!("/api/chords/{chord_id}"),
            None,
            Some(&user),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/chords/{chord_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/chords/{chord_id}"), None, Some(&admin))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chord_image_upload() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let chord_id = app.create_chord(&admin, "E", &[0, 2, 2, 1, 0, 0]).await;

    let uploaded = app
        .upload(
            &format!("/api/chords/{chord_id}/image"),
            "diagram.png",
            b"fake-png-bytes",
            &admin,
        )
        .await;
    assert_eq!(uploaded.status, StatusCode::OK);
    let url = uploaded.body["image_url"].as_str().unwrap();
    assert_eq!(url, format!("/media/chords/{chord_id}_image.png"));

    // Disallowed extension.
    let rejected = app
        .upload(
            &format!("/api/chords/{chord_id}/image"),
            "diagram.gif",
            b"gif-bytes",
            &admin,
        )
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);

    // Regular users cannot upload.
    app.register("iris", "Secr3tPwd").await;
    let user = app.login("iris", "Secr3tPwd").await;
    let forbidden = app
        .upload(
            &format!("/api/chords/{chord_id}/image"),
            "diagram.png",
            b"png",
            &user,
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}
