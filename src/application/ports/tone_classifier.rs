use async_trait::async_trait;

#[async_trait]
pub trait ToneClassifier: Send + Sync {
    /// Returns a short categorical verdict describing the emotional tone
    /// of the transcript.
    async fn classify(&self, transcript: &str) -> Result<String, ToneClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ToneClassifierError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
