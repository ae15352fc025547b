use axum::response::Html;

use crate::presentation::templates::render_upload_form;

pub async fn upload_form_handler() -> Html<String> {
    Html(render_upload_form(None))
}
