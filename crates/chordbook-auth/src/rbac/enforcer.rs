//! RBAC enforcement logic — checks whether a role has a required permission.

use chordbook_core::error::AppError;
use chordbook_entity::user::UserRole;

use super::policies::{Permission, RbacPolicies};

/// Enforces role-based access control for catalog operations.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Checks whether the given role has the required permission.
    ///
    /// Returns `Ok(())` if allowed, or `Err(AppError::forbidden)` if denied.
    pub fn require_permission(
        &self,
        role: &UserRole,
        permission: &Permission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{role}' does not have permission '{permission:?}'"
            )))
        }
    }

    /// Checks whether the role has the required permission (returns bool).
    pub fn has_permission(&self, role: &UserRole, permission: &Permission) -> bool {
        self.policies.has_permission(role, permission)
    }

    /// Returns whether the role is an admin.
    pub fn is_admin(&self, role: &UserRole) -> bool {
        matches!(role, UserRole::Admin)
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}
