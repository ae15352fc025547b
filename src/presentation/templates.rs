use crate::domain::RequestOutcome;

/// Escapes text for interpolation into HTML element content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:640px;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;min-height:6rem}\
.error{color:#b00020}\
.verdict{font-weight:bold}";

/// The upload form, optionally carrying a validation error message.
pub fn render_upload_form(error: Option<&str>) -> String {
    let error_block = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>\n", escape_html(msg)),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Call tone check</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <h1>Call tone check</h1>\n\
         {error_block}\
         <form action=\"/transcribe\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <p><label>Audio file (mp3 or wav):<br>\
         <input type=\"file\" name=\"file\" accept=\"audio/mpeg,audio/wav\"></label></p>\n\
         <p><label>Or paste the call text:<br>\
         <textarea name=\"text_input\"></textarea></label></p>\n\
         <p><label><input type=\"checkbox\" name=\"analyze\" value=\"true\"> \
         Analyze emotional tone</label></p>\n\
         <p><button type=\"submit\">Transcribe</button></p>\n\
         </form>\n</body>\n</html>\n",
        style = PAGE_STYLE,
        error_block = error_block,
    )
}

/// The result page: transcript always, verdict only when analysis ran.
pub fn render_result_page(outcome: &RequestOutcome, analyze: bool) -> String {
    let verdict_block = if analyze {
        format!(
            "<h2>Verdict</h2>\n<p class=\"verdict\">{}</p>\n",
            escape_html(&outcome.verdict)
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Call tone result</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <h1>Result</h1>\n\
         <h2>Transcript</h2>\n<p>{transcript}</p>\n\
         {verdict_block}\
         <p><a href=\"/\">Back</a></p>\n\
         </body>\n</html>\n",
        style = PAGE_STYLE,
        transcript = escape_html(&outcome.transcript),
        verdict_block = verdict_block,
    )
}
