//! Media storage abstraction.
//!
//! The service layer records only the retrieval URL on catalog rows; the
//! bytes themselves go through this trait. Keeping it a trait lets tests
//! substitute an in-memory double for the filesystem.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Backend-agnostic store for uploaded media files.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Write the given bytes at the given relative path, replacing any
    /// existing object.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete the object at the given relative path.
    ///
    /// Fails with NotFound if the object does not exist.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check that the backing store is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;
}
