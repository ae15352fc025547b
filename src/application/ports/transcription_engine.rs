use async_trait::async_trait;

use crate::domain::AudioUpload;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, upload: &AudioUpload) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
