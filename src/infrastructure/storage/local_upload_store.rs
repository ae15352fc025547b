use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use object_store::ObjectStore;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::PutPayload;

use crate::application::ports::{UploadStore, UploadStoreError};

/// Filesystem-backed upload store with an append-only retention policy.
///
/// Objects are named `<utc timestamp>_<original filename>` so concurrent
/// requests never overwrite each other. Nothing is ever deleted here; the
/// directory is an audit trail of every upload received.
pub struct LocalUploadStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn object_name(filename: &str) -> String {
        // Path separators in a client-supplied filename must not escape the
        // store prefix.
        let safe: String = filename
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        format!("{}_{}", Utc::now().format("%Y%m%dT%H%M%S%6f"), safe)
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<String, UploadStoreError> {
        let name = Self::object_name(filename);
        let store_path = StorePath::from(name.as_str());

        self.inner
            .put(&store_path, PutPayload::from(data.to_vec()))
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        Ok(name)
    }
}
