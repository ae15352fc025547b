mod outcome;
mod upload;

pub use outcome::{ERROR_MARKER, FALLBACK_VERDICT, RequestOutcome};
pub use upload::{AudioFormat, AudioUpload};
