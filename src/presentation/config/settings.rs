/// Immutable process configuration, read from the environment exactly once
/// at startup and passed explicitly into the components that need it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    /// Outbound proxy for both API calls, e.g. `http://proxy:3128`.
    pub proxy_url: Option<String>,
    /// Override of the API base, used by tests; `None` means api.openai.com.
    pub base_url: Option<String>,
    pub transcription_model: String,
    pub chat_model: String,
    pub language: String,
    /// One overall ceiling applied to each outbound call through the shared
    /// client; exceeding it surfaces as a catchable failure.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub upload_dir: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("OPENAI_API_KEY must be set")]
    MissingApiKey,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            openai: OpenAiSettings {
                api_key,
                proxy_url: std::env::var("HTTP_PROXY").ok().filter(|p| !p.is_empty()),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                transcription_model: std::env::var("TRANSCRIPTION_MODEL")
                    .unwrap_or_else(|_| "whisper-1".to_string()),
                chat_model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
                language: std::env::var("TRANSCRIPTION_LANGUAGE")
                    .unwrap_or_else(|_| "ru".to_string()),
                request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            },
            storage: StorageSettings {
                upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            },
        })
    }
}
