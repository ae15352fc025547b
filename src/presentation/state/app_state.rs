use std::sync::Arc;

use crate::application::ports::{ToneClassifier, TranscriptionEngine, UploadStore};
use crate::application::services::TranscriptionPipeline;

pub struct AppState<E, C, S>
where
    E: TranscriptionEngine,
    C: ToneClassifier,
    S: UploadStore,
{
    pub pipeline: Arc<TranscriptionPipeline<E, C, S>>,
}

impl<E, C, S> Clone for AppState<E, C, S>
where
    E: TranscriptionEngine,
    C: ToneClassifier,
    S: UploadStore,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}
