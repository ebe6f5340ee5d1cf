//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use chordbook_entity::user::UserRole;

/// A system-level permission guarding a catalog operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Chord catalog
    /// Add chords to the catalog.
    ChordCreate,
    /// Remove chords from the catalog.
    ChordDelete,
    /// Upload chord diagram images and sound samples.
    ChordUploadMedia,

    // Song catalog
    /// Add songs to the catalog.
    SongCreate,
    /// Remove songs from the catalog.
    SongDelete,
    /// Upload song sheets and recordings.
    SongUploadMedia,

    // User management
    /// List registered users.
    UserList,
    /// Change another user's role.
    UserChangeRole,

    // Everyone
    /// Browse chords and songs.
    CatalogRead,
    /// Save and unsave favorites.
    LibrarySave,
    /// Access health endpoints.
    SystemHealth,
}

/// Defines the mapping from each role to its set of allowed permissions.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → set of permissions.
    policies: HashMap<UserRole, HashSet<Permission>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        // User: browse and bookmark
        let user: HashSet<Permission> = [
            Permission::CatalogRead,
            Permission::LibrarySave,
            Permission::SystemHealth,
        ]
        .into_iter()
        .collect();
        policies.insert(UserRole::User, user);

        // Admin: everything
        let admin: HashSet<Permission> = [
            Permission::ChordCreate,
            Permission::ChordDelete,
            Permission::ChordUploadMedia,
            Permission::SongCreate,
            Permission::SongDelete,
            Permission::SongUploadMedia,
            Permission::UserList,
            Permission::UserChangeRole,
            Permission::CatalogRead,
            Permission::LibrarySave,
            Permission::SystemHealth,
        ]
        .into_iter()
        .collect();
        policies.insert(UserRole::Admin, admin);

        Self { policies }
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: &UserRole) -> HashSet<Permission> {
        self.policies.get(role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: &UserRole, permission: &Permission) -> bool {
        self.policies
            .get(role)
            .map(|perms| perms.contains(permission))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
