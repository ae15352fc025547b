/// Marker prefixed to the transcript field when the pipeline fails.
pub const ERROR_MARKER: &str = "Error: ";

/// Verdict substituted when tone classification could not run.
pub const FALLBACK_VERDICT: &str = "Could not determine tone";

/// The final state of one transcription request, always renderable.
///
/// A response always carries both a transcript and a verdict: failures
/// substitute an error-marker transcript and the fallback verdict instead
/// of leaving either field missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub transcript: String,
    pub verdict: String,
    pub error: Option<String>,
}

impl RequestOutcome {
    pub fn success(transcript: String, verdict: String) -> Self {
        Self {
            transcript,
            verdict,
            error: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            transcript: format!("{}{}", ERROR_MARKER, message),
            verdict: FALLBACK_VERDICT.to_string(),
            error: Some(message),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
