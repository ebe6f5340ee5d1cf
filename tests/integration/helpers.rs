//! Shared test helpers for integration tests.

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower::ServiceExt;

use chordbook_api::{AppState, build_router};
use chordbook_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig, StorageConfig,
};
use chordbook_database::DatabasePool;
use chordbook_storage::LocalMediaStorage;

/// Tests share one database; serialize them so truncation in one test
/// cannot race another test's rows.
static DB_LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Keeps the temporary media directory alive for the test's duration
    _media_dir: tempfile::TempDir,
    /// Exclusive hold on the shared test database
    _db_guard: OwnedMutexGuard<()>,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (Null when the body is empty).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured in the environment.
    pub async fn try_new() -> Option<Self> {
        let Ok(db_url) = std::env::var("CHORDBOOK_TEST_DATABASE_URL") else {
            eprintln!("CHORDBOOK_TEST_DATABASE_URL not set; skipping integration test");
            return None;
        };

        let db_guard = DB_LOCK
            .get_or_init(|| Arc::new(Mutex::new(())))
            .clone()
            .lock_owned()
            .await;

        let media_dir = tempfile::tempdir().expect("Failed to create media tempdir");

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: db_url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 300,
            },
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                ..AuthConfig::default()
            },
            storage: StorageConfig {
                media_root: media_dir.path().to_string_lossy().into_owned(),
                public_prefix: "/media".to_string(),
            },
            logging: LoggingConfig::default(),
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        chordbook_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        Self::clean_database(db.pool()).await;

        let storage = Arc::new(
            LocalMediaStorage::new(&config.storage.media_root)
                .await
                .expect("Failed to init media storage"),
        );

        let db_pool = db.pool().clone();
        let state = AppState::new(Arc::new(config), db, storage);
        let router = build_router(state);

        Some(Self {
            router,
            db_pool,
            _media_dir: media_dir,
            _db_guard: db_guard,
        })
    }

    /// Remove all rows so each test starts from a blank catalog.
    async fn clean_database(pool: &PgPool) {
        sqlx::query(
            "TRUNCATE saved_songs, saved_chords, song_chords, songs, chords, users CASCADE",
        )
        .execute(pool)
        .await
        .expect("Failed to clean test database");
    }

    /// Make a JSON request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        Self::decode(response).await
    }

    /// Make a multipart file-upload request against the router.
    pub async fn upload(
        &self,
        path: &str,
        filename: &str,
        content: &[u8],
        token: &str,
    ) -> TestResponse {
        let boundary = "chordbook-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("authorization", format!("Bearer {token}"))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Upload request failed");

        Self::decode(response).await
    }

    /// Decode a response into status + JSON body.
    async fn decode(response: axum::response::Response) -> TestResponse {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Register a regular user through the API.
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": username,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Log in through the API and return the access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed");
        response.body["access_token"].as_str().unwrap().to_string()
    }

    /// Register a user and promote them to admin directly in the database,
    /// then return a fresh token carrying the admin role.
    pub async fn create_admin(&self, username: &str, password: &str) -> String {
        let response = self.register(username, password).await;
        assert_eq!(response.status, StatusCode::CREATED, "register failed");

        sqlx::query("UPDATE users SET role = 'admin' WHERE username = $1")
            .bind(username)
            .execute(&self.db_pool)
            .await
            .expect("Failed to promote admin");

        self.login(username, password).await
    }

    /// Create a chord through the API as the given admin; returns its id.
    pub async fn create_chord(&self, admin_token: &str, name: &str, frets: &[i32]) -> String {
        let response = self
            .request(
                "POST",
                "/api/chords",
                Some(serde_json::json!({
                    "name": name,
                    "frets": frets,
                })),
                Some(admin_token),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "create chord failed");
        response.body["id"].as_str().unwrap().to_string()
    }

    /// Create a song through the API as the given admin; returns its id.
    pub async fn create_song(
        &self,
        admin_token: &str,
        title: &str,
        genre: &str,
        chord_ids: &[String],
    ) -> String {
        let response = self
            .request(
                "POST",
                "/api/songs",
                Some(serde_json::json!({
                    "title": title,
                    "genre": genre,
                    "chord_ids": chord_ids,
                })),
                Some(admin_token),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "create song failed");
        response.body["id"].as_str().unwrap().to_string()
    }
}
