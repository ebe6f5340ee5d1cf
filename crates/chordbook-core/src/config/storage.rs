//! Media storage configuration.

use serde::{Deserialize, Serialize};

/// Media storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded media files.
    #[serde(default = "default_media_root")]
    pub media_root: String,
    /// Public URL prefix under which stored media is served.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            public_prefix: default_public_prefix(),
        }
    }
}

fn default_media_root() -> String {
    "./data/media".to_string()
}

fn default_public_prefix() -> String {
    "/media".to_string()
}
