//! Admin user management — listing and role changes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use chordbook_auth::rbac::{Permission, RbacEnforcer};
use chordbook_core::error::AppError;
use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_database::repositories::UserRepository;
use chordbook_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { user_repo, rbac }
    }

    /// Lists all users with pagination.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.rbac.require_permission(&ctx.role, &Permission::UserList)?;

        self.user_repo.find_all(&page).await
    }

    /// Changes another user's role.
    pub async fn set_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<User, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::UserChangeRole)?;

        let user = self.user_repo.update_role(user_id, role).await?;

        info!(
            admin_id = %ctx.user_id,
            user_id = %user.id,
            new_role = %user.role,
            "User role changed"
        );

        Ok(user)
    }
}
