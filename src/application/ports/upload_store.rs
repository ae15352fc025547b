use std::io;

use async_trait::async_trait;

/// Append-only store for received audio uploads.
///
/// Stored objects are retained indefinitely for audit purposes; there is
/// deliberately no delete operation. Bounded storage, if ever needed, is the
/// job of an external cleanup collaborator.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persists the upload under a collision-free name derived from the
    /// original filename and returns the stored object's path.
    async fn store(&self, filename: &str, data: &[u8]) -> Result<String, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
