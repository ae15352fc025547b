use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use calltone::application::services::TranscriptionPipeline;
use calltone::infrastructure::llm::{OpenAiToneClassifier, OpenAiWhisperEngine};
use calltone::infrastructure::observability::{LogFormat, init_tracing};
use calltone::infrastructure::storage::LocalUploadStore;
use calltone::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    init_tracing(LogFormat::from_env(), settings.server.port);

    // One shared outbound client: the proxy and the overall per-call timeout
    // apply to both the transcription and the classification requests.
    let mut client_builder = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.openai.request_timeout_secs));
    if let Some(proxy_url) = &settings.openai.proxy_url {
        client_builder = client_builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }
    let http_client = client_builder.build()?;

    let engine = Arc::new(OpenAiWhisperEngine::new(
        http_client.clone(),
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.transcription_model.clone()),
        Some(settings.openai.language.clone()),
    ));
    let classifier = Arc::new(OpenAiToneClassifier::new(
        http_client,
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.chat_model.clone()),
    ));
    let store = Arc::new(LocalUploadStore::new(PathBuf::from(
        &settings.storage.upload_dir,
    ))?);

    let pipeline = Arc::new(TranscriptionPipeline::new(engine, classifier, store));

    let state = AppState { pipeline };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
