//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chordbook_auth::jwt::{JwtDecoder, JwtEncoder};
use chordbook_auth::password::{PasswordHasher, PasswordValidator};
use chordbook_auth::rbac::RbacEnforcer;
use chordbook_core::config::AppConfig;
use chordbook_core::traits::storage::MediaStorage;
use chordbook_database::DatabasePool;
use chordbook_database::repositories::{
    ChordRepository, LibraryRepository, SongRepository, UserRepository,
};
use chordbook_service::{
    AdminUserService, AuthService, ChordService, LibraryService, MediaService, SongService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db: DatabasePool,
    /// Media byte store.
    pub storage: Arc<dyn MediaStorage>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Auth service (register/login/me).
    pub auth_service: Arc<AuthService>,
    /// Admin user management service.
    pub admin_user_service: Arc<AdminUserService>,
    /// Chord catalog service.
    pub chord_service: Arc<ChordService>,
    /// Song catalog service.
    pub song_service: Arc<SongService>,
    /// Saved-library service.
    pub library_service: Arc<LibraryService>,
    /// Media upload service.
    pub media_service: Arc<MediaService>,
}

impl AppState {
    /// Wire up all repositories and services from the three externally
    /// constructed dependencies: config, database pool, and media store.
    pub fn new(config: Arc<AppConfig>, db: DatabasePool, storage: Arc<dyn MediaStorage>) -> Self {
        let pool = db.pool().clone();

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let chord_repo = Arc::new(ChordRepository::new(pool.clone()));
        let song_repo = Arc::new(SongRepository::new(pool.clone()));
        let library_repo = Arc::new(LibraryRepository::new(pool));

        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            hasher,
            validator,
            jwt_encoder,
        ));
        let admin_user_service = Arc::new(AdminUserService::new(user_repo, rbac.clone()));
        let chord_service = Arc::new(ChordService::new(chord_repo.clone(), rbac.clone()));
        let song_service = Arc::new(SongService::new(
            song_repo.clone(),
            chord_repo.clone(),
            rbac.clone(),
        ));
        let library_service = Arc::new(LibraryService::new(library_repo, rbac.clone()));
        let media_service = Arc::new(MediaService::new(
            storage.clone(),
            chord_repo,
            song_repo,
            rbac,
            config.storage.public_prefix.clone(),
        ));

        Self {
            config,
            db,
            storage,
            jwt_decoder,
            auth_service,
            admin_user_service,
            chord_service,
            song_service,
            library_service,
            media_service,
        }
    }
}
