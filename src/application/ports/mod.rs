mod tone_classifier;
mod transcription_engine;
mod upload_store;

pub use tone_classifier::{ToneClassifier, ToneClassifierError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use upload_store::{UploadStore, UploadStoreError};
