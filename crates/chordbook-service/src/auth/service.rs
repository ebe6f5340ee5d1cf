//! Registration and login flows.

use std::sync::Arc;

use tracing::info;

use chordbook_auth::jwt::{IssuedToken, JwtEncoder};
use chordbook_auth::password::{PasswordHasher, PasswordValidator};
use chordbook_core::error::AppError;
use chordbook_database::repositories::UserRepository;
use chordbook_entity::user::model::CreateUser;
use chordbook_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Minimum username length.
const USERNAME_MIN: usize = 3;
/// Maximum username length.
const USERNAME_MAX: usize = 50;

/// Handles registration, login, and current-user lookup.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// The issued session token.
    pub token: IssuedToken,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new user account.
    ///
    /// Public registration always creates the `User` role; roles change
    /// only through the admin endpoint.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();
        if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
            return Err(AppError::validation(format!(
                "Username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
            )));
        }

        self.validator.validate(password)?;

        // Pre-check for a friendlier error; the unique constraint still
        // backstops concurrent registrations.
        if self
            .user_repo
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Username '{username}' already exists"
            )));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Authenticates a user and issues a session token.
    ///
    /// Unknown username and wrong password produce the same error so the
    /// response does not leak which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let token = self.encoder.issue(user.id, &user.username, user.role)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResult { user, token })
    }

    /// Gets the current user's full profile.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
