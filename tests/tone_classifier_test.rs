use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use calltone::application::ports::{ToneClassifier, ToneClassifierError};
use calltone::infrastructure::llm::OpenAiToneClassifier;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn create_classifier(base_url: &str) -> OpenAiToneClassifier {
    OpenAiToneClassifier::new(
        reqwest::Client::new(),
        "test-key".to_string(),
        Some(base_url.to_string()),
        None,
    )
}

#[tokio::test]
async fn given_valid_response_when_classifying_then_returns_trimmed_first_choice() {
    let response_body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "  Aggressive \n"}},
            {"message": {"role": "assistant", "content": "Calm"}}
        ]
    }"#;
    let (base_url, shutdown_tx) = start_mock_server(200, response_body).await;

    let result = create_classifier(&base_url).classify("the call text").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Aggressive");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_classifying_then_returns_invalid_response() {
    let response_body = r#"{"choices": []}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, response_body).await;

    let result = create_classifier(&base_url).classify("the call text").await;

    assert!(matches!(
        result,
        Err(ToneClassifierError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_auth_error_when_classifying_then_returns_api_error() {
    let response_body = r#"{"error": {"message": "invalid api key"}}"#;
    let (base_url, shutdown_tx) = start_mock_server(401, response_body).await;

    let result = create_classifier(&base_url).classify("the call text").await;

    assert!(matches!(
        result,
        Err(ToneClassifierError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_json_when_classifying_then_returns_invalid_response() {
    let response_body = "<html>gateway error</html>";
    let (base_url, shutdown_tx) = start_mock_server(200, response_body).await;

    let result = create_classifier(&base_url).classify("the call text").await;

    assert!(matches!(
        result,
        Err(ToneClassifierError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}
