//! Route definitions for the Chordbook HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`; uploaded
//! media is served statically under the configured public prefix.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(chord_routes())
        .merge(song_routes())
        .merge(health_routes());

    let media_dir = ServeDir::new(&state.config.storage.media_root);
    let media_prefix = state.config.storage.public_prefix.clone();

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&media_prefix, media_dir)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Admin user management endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}/role", put(handlers::user::set_role))
}

/// Chord catalog, media upload, and bookmark endpoints
fn chord_routes() -> Router<AppState> {
    Router::new()
        .route("/chords", post(handlers::chord::create_chord))
        .route("/chords", get(handlers::chord::list_chords))
        .route("/chords/{id}", get(handlers::chord::get_chord))
        .route("/chords/{id}", delete(handlers::chord::delete_chord))
        .route("/chords/{id}/image", post(handlers::chord::upload_image))
        .route("/chords/{id}/audio", post(handlers::chord::upload_audio))
        .route("/chords/{id}/save", post(handlers::library::save_chord))
        .route("/chords/{id}/save", delete(handlers::library::unsave_chord))
        .route("/chords/saved/me", get(handlers::library::saved_chords))
}

/// Song catalog, media upload, and bookmark endpoints
fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", post(handlers::song::create_song))
        .route("/songs", get(handlers::song::list_songs))
        .route("/songs/{id}", get(handlers::song::get_song))
        .route("/songs/{id}", delete(handlers::song::delete_song))
        .route("/songs/{id}/sheet", post(handlers::song::upload_sheet))
        .route("/songs/{id}/audio", post(handlers::song::upload_audio))
        .route("/songs/{id}/save", post(handlers::library::save_song))
        .route("/songs/{id}/save", delete(handlers::library::unsave_song))
        .route("/songs/saved/me", get(handlers::library::saved_songs))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
