use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    ToneClassifier, ToneClassifierError, TranscriptionEngine, TranscriptionError, UploadStore,
    UploadStoreError,
};
use crate::domain::{AudioFormat, AudioUpload, RequestOutcome};

/// A raw multipart file field as received by the handler, before validation.
#[derive(Debug, Clone)]
pub struct FileField {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// The single usable source of transcript content for one request.
#[derive(Debug, Clone)]
pub enum TranscriptSource {
    Audio(AudioUpload),
    Text(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("either an audio file or a text input is required")]
    MissingInput,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Store(#[from] UploadStoreError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Classification(#[from] ToneClassifierError),
}

/// Resolves the transcript source for a request without touching the network.
///
/// A file field with an empty filename and no bytes is what browsers submit
/// when no file was chosen; it counts as absent.
pub fn validate_input(
    file: Option<FileField>,
    text: Option<String>,
) -> Result<TranscriptSource, ValidationError> {
    let file = file.filter(|f| !f.filename.is_empty() || !f.data.is_empty());

    if let Some(field) = file {
        let format = AudioFormat::from_mime(&field.content_type)
            .ok_or_else(|| ValidationError::UnsupportedFormat(field.content_type.clone()))?;
        return Ok(TranscriptSource::Audio(AudioUpload::new(
            field.filename,
            format,
            field.data,
        )));
    }

    match text.map(|t| t.trim().to_string()) {
        Some(t) if !t.is_empty() => Ok(TranscriptSource::Text(t)),
        _ => Err(ValidationError::MissingInput),
    }
}

/// Drives one request through persist, transcribe, and classify stages.
///
/// The two outbound calls are strictly sequential: classification consumes the
/// transcription's output. Every stage failure is folded into a renderable
/// [`RequestOutcome`]; nothing propagates out of the pipeline.
pub struct TranscriptionPipeline<E, C, S>
where
    E: TranscriptionEngine,
    C: ToneClassifier,
    S: UploadStore,
{
    engine: Arc<E>,
    classifier: Arc<C>,
    store: Arc<S>,
}

impl<E, C, S> TranscriptionPipeline<E, C, S>
where
    E: TranscriptionEngine,
    C: ToneClassifier,
    S: UploadStore,
{
    pub fn new(engine: Arc<E>, classifier: Arc<C>, store: Arc<S>) -> Self {
        Self {
            engine,
            classifier,
            store,
        }
    }

    pub async fn run(&self, source: TranscriptSource, analyze: bool) -> RequestOutcome {
        match self.execute(source, analyze).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Transcription pipeline failed");
                RequestOutcome::failure(e.to_string())
            }
        }
    }

    async fn execute(
        &self,
        source: TranscriptSource,
        analyze: bool,
    ) -> Result<RequestOutcome, PipelineError> {
        let transcript = match source {
            TranscriptSource::Text(text) => text,
            TranscriptSource::Audio(upload) => {
                let stored_path = self.store.store(&upload.filename, &upload.data).await?;
                tracing::info!(
                    path = %stored_path,
                    bytes = upload.data.len(),
                    "Upload persisted"
                );
                self.engine.transcribe(&upload).await?
            }
        };

        let verdict = if analyze {
            self.classifier.classify(&transcript).await?
        } else {
            String::new()
        };

        Ok(RequestOutcome::success(transcript, verdict))
    }
}
