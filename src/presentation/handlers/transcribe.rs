use axum::extract::{Multipart, State};
use axum::response::Html;

use crate::application::ports::{ToneClassifier, TranscriptionEngine, UploadStore};
use crate::application::services::{FileField, validate_input};
use crate::presentation::state::AppState;
use crate::presentation::templates::{render_result_page, render_upload_form};

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "on")
}

/// Accepts the multipart form, runs the pipeline, and always answers with a
/// rendered HTML page: the form again on validation failure, the result page
/// otherwise. Outbound failures are folded into the result page by the
/// pipeline, so nothing here returns a non-200 status.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E, C, S>(
    State(state): State<AppState<E, C, S>>,
    mut multipart: Multipart,
) -> Html<String>
where
    E: TranscriptionEngine + 'static,
    C: ToneClassifier + 'static,
    S: UploadStore + 'static,
{
    let mut file: Option<FileField> = None;
    let mut text: Option<String> = None;
    let mut analyze = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return Html(render_upload_form(Some("Could not read the submitted form.")));
            }
        };

        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(data) => {
                        tracing::debug!(
                            filename = %filename,
                            content_type = %content_type,
                            bytes = data.len(),
                            "File field received"
                        );
                        file = Some(FileField {
                            filename,
                            content_type,
                            data,
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read file field");
                        return Html(render_upload_form(Some(
                            "Could not read the uploaded file.",
                        )));
                    }
                }
            }
            Some("text_input") => {
                text = field.text().await.ok();
            }
            Some("analyze") => {
                analyze = field
                    .text()
                    .await
                    .map(|v| is_truthy(&v))
                    .unwrap_or(false);
            }
            _ => {}
        }
    }

    let source = match validate_input(file, text) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(error = %e, "Input validation failed");
            return Html(render_upload_form(Some(&e.to_string())));
        }
    };

    let outcome = state.pipeline.run(source, analyze).await;

    if let Some(error) = &outcome.error {
        tracing::warn!(error = %error, "Request completed with error outcome");
    }

    Html(render_result_page(&outcome, analyze))
}
