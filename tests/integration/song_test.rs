//! Integration tests for the song catalog.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_song_with_chords() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let am = app.create_chord(&admin, "Am", &[-1, 0, 2, 2, 1, 0]).await;
    let g = app.create_chord(&admin, "G", &[3, 2, 0, 0, 0, 3]).await;

    let response = app
        .request(
            "POST",
            "/api/songs",
            Some(serde_json::json!({
                "title": "House of the Rising Sun",
                "genre": "rock",
                "lyrics": "There is a house...",
                "chord_ids": [am, g],
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body["title"].as_str().unwrap(),
        "House of the Rising Sun"
    );
    assert_eq!(response.body["genre"].as_str().unwrap(), "rock");
}

#[tokio::test]
async fn test_create_song_with_missing_chord_fails() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let am = app.create_chord(&admin, "Am", &[-1, 0, 2, 2, 1, 0]).await;

    let response = app
        .request(
            "POST",
            "/api/songs",
            Some(serde_json::json!({
                "title": "Ghost Song",
                "chord_ids": [am, Uuid::new_v4()],
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Nothing was written.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_regular_user_cannot_create_song() {
    let Some(app) = TestApp::try_new().await else { return };

    app.register("july", "Secr3tPwd").await;
    let token = app.login("july", "Secr3tPwd").await;

    let response = app
        .request(
            "POST",
            "/api/songs",
            Some(serde_json::json!({"title": "Nope", "chord_ids": []})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_song_includes_chords() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let am = app.create_chord(&admin, "Am", &[-1, 0, 2, 2, 1, 0]).await;
    let e = app.create_chord(&admin, "E", &[0, 2, 2, 1, 0, 0]).await;
    let song_id = app
        .create_song(&admin, "Greensleeves", "classic", &[am.clone(), e])
        .await;

    let response = app
        .request("GET", &format!("/api/songs/{song_id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let chords = response.body["chords"].as_array().unwrap();
    assert_eq!(chords.len(), 2);
    assert_eq!(chords[0]["name"].as_str().unwrap(), "Am");
    assert_eq!(chords[1]["name"].as_str().unwrap(), "E");
}

#[tokio::test]
async fn test_song_filters() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let am = app.create_chord(&admin, "Am", &[-1, 0, 2, 2, 1, 0]).await;
    let g = app.create_chord(&admin, "G", &[3, 2, 0, 0, 0, 3]).await;

    app.create_song(&admin, "Autumn Leaves", "jazz", &[am.clone()])
        .await;
    app.create_song(&admin, "Summer Nights", "pop", &[g.clone()])
        .await;
    app.create_song(&admin, "Autumn Again", "pop", &[am.clone(), g.clone()])
        .await;

    // Title substring, case-insensitive.
    let by_title = app
        .request("GET", "/api/songs?search=autumn", None, Some(&admin))
        .await;
    assert_eq!(by_title.body["items"].as_array().unwrap().len(), 2);

    // Genre filter.
    let by_genre = app
        .request("GET", "/api/songs?genre=jazz", None, Some(&admin))
        .await;
    let items = by_genre.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"].as_str().unwrap(), "Autumn Leaves");

    // Chord filter: songs that use Am.
    let by_chord = app
        .request("GET", &format!("/api/songs?chord_id={am}"), None, Some(&admin))
        .await;
    assert_eq!(by_chord.body["items"].as_array().unwrap().len(), 2);

    // Combined: pop songs that use Am.
    let combined = app
        .request(
            "GET",
            &format!("/api/songs?genre=pop&chord_id={am}"),
            None,
            Some(&admin),
        )
        .await;
    let items = combined.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"].as_str().unwrap(), "Autumn Again");
}

#[tokio::test]
async fn test_delete_song_cascades_links() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let am = app.create_chord(&admin, "Am", &[-1, 0, 2, 2, 1, 0]).await;
    let song_id = app
        .create_song(&admin, "Doomed Song", "other", &[am])
        .await;

    // Bookmark it too, so both join tables have rows.
    app.register("kate", "Secr3tPwd").await;
    let user = app.login("kate", "Secr3tPwd").await;
    let saved = app
        .request(
            "POST",
            &format!("/api/songs/{song_id}/save"),
            None,
            Some(&user),
        )
        .await;
    assert_eq!(saved.status, StatusCode::CREATED);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/songs/{song_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    // No orphaned join rows.
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM song_chords")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(links, 0);
    let bookmarks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM saved_songs")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(bookmarks, 0);
}

#[tokio::test]
async fn test_song_sheet_upload_allows_pdf() {
    let Some(app) = TestApp::try_new().await else { return };

    let admin = app.create_admin("root", "Adm1nPwd!").await;
    let song_id = app.create_song(&admin, "Sheet Song", "other", &[]).await;

    let uploaded = app
        .upload(
            &format!("/api/songs/{song_id}/sheet"),
            "score.pdf",
            b"%PDF-fake",
            &admin,
        )
        .await;
    assert_eq!(uploaded.status, StatusCode::OK);
    assert_eq!(
        uploaded.body["sheet_url"].as_str().unwrap(),
        format!("/media/songs/{song_id}_sheet.pdf")
    );

    // Audio extension is not a valid sheet.
    let rejected = app
        .upload(
            &format!("/api/songs/{song_id}/sheet"),
            "score.mp3",
            b"mp3",
            &admin,
        )
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
}
