use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ToneClassifier, ToneClassifierError};

/// Classifies support-call tone through the OpenAI chat-completions API.
///
/// The verdict label set is produced by the model, not by this service; the
/// prompt asks for one of Calm / Dissatisfied / Aggressive and the trimmed
/// first choice is taken verbatim.
pub struct OpenAiToneClassifier {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiToneClassifier {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4".to_string()),
        }
    }

    fn build_prompt(transcript: &str) -> String {
        format!(
            "Analyze the following transcript of a customer call to technical support \
             and judge whether the caller sounds irritated, dissatisfied or aggressive. \
             Reply with a short verdict: Calm / Dissatisfied / Aggressive. \
             Call transcript: {}",
            transcript
        )
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl ToneClassifier for OpenAiToneClassifier {
    async fn classify(&self, transcript: &str) -> Result<String, ToneClassifierError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(transcript),
            }],
        };

        tracing::debug!(model = %self.model, chars = transcript.len(), "Requesting tone classification");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ToneClassifierError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ToneClassifierError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ToneClassifierError::InvalidResponse(format!("parse response: {}", e)))?;

        let verdict = result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ToneClassifierError::InvalidResponse("no choices returned".to_string()))?;

        tracing::info!(verdict = %verdict.trim(), "Tone classification completed");

        Ok(verdict.trim().to_string())
    }
}
