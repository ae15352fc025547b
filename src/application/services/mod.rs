mod transcription_pipeline;

pub use transcription_pipeline::{
    FileField, PipelineError, TranscriptSource, TranscriptionPipeline, ValidationError,
    validate_input,
};
