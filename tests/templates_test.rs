use calltone::domain::RequestOutcome;
use calltone::presentation::templates::{escape_html, render_result_page, render_upload_form};

#[test]
fn given_markup_in_input_when_escaping_then_tags_are_neutralized() {
    assert_eq!(
        escape_html(r#"<script>alert("hi")</script>"#),
        "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
    );
    assert_eq!(escape_html("a & b's"), "a &amp; b&#39;s");
}

#[test]
fn given_no_error_when_rendering_form_then_no_error_block() {
    let html = render_upload_form(None);
    assert!(html.contains("<form action=\"/transcribe\""));
    assert!(!html.contains("class=\"error\""));
}

#[test]
fn given_error_when_rendering_form_then_message_is_shown_escaped() {
    let html = render_upload_form(Some("unsupported audio format: <bad>"));
    assert!(html.contains("class=\"error\""));
    assert!(html.contains("unsupported audio format: &lt;bad&gt;"));
}

#[test]
fn given_outcome_without_analysis_when_rendering_then_verdict_section_is_absent() {
    let outcome = RequestOutcome::success("the transcript".to_string(), String::new());
    let html = render_result_page(&outcome, false);
    assert!(html.contains("the transcript"));
    assert!(!html.contains("Verdict"));
}

#[test]
fn given_outcome_with_analysis_when_rendering_then_verdict_is_shown() {
    let outcome = RequestOutcome::success("the transcript".to_string(), "Calm".to_string());
    let html = render_result_page(&outcome, true);
    assert!(html.contains("Verdict"));
    assert!(html.contains("Calm"));
}

#[test]
fn given_transcript_with_markup_when_rendering_result_then_it_is_escaped() {
    let outcome = RequestOutcome::success("<b>bold claim</b>".to_string(), String::new());
    let html = render_result_page(&outcome, false);
    assert!(html.contains("&lt;b&gt;bold claim&lt;/b&gt;"));
    assert!(!html.contains("<b>bold claim</b>"));
}
