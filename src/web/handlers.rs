// flowgen — Web UI handlers

use super::WebState;
use crate::generator::{GenerateError, Generation};
use axum::extract::State;
use axum::response::{Html, Json};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generator HTML page.
pub async fn index(State(_state): State<Arc<WebState>>) -> Html<String> {
    Html(super::templates::PAGE_HTML.to_string())
}

/// JSON status endpoint.
pub async fn api_status(State(state): State<Arc<WebState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "online",
        "version": crate::VERSION,
        "model": state.generator.model(),
        "key_configured": !state.config.provider.api_key.is_empty(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub description: String,
}

/// Run the generation pipeline and render the result fragment.
///
/// Exactly one of four fragments comes back: a warning (empty input, no
/// request issued), a success banner with the pretty-printed JSON, an
/// error banner with the raw unparsed text, or an error banner alone for
/// a failed request.
pub async fn generate(
    State(state): State<Arc<WebState>>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let html = match state.generator.generate(&form.description).await {
        Err(GenerateError::EmptyDescription) => {
            r#"<div class="banner warning">⚠️ Please describe your workflow first.</div>"#
                .to_string()
        }
        Err(GenerateError::Request(e)) => {
            format!(
                r#"<div class="banner error">❌ Completion API error: {}</div>"#,
                html_escape(&e.to_string())
            )
        }
        Ok(Generation::Parsed { pretty }) => {
            format!(
                r#"<div class="banner success">✅ Valid JSON generated!</div>
<pre class="artifact"><code class="language-json">{}</code></pre>"#,
                html_escape(&pretty)
            )
        }
        Ok(Generation::Unparsed { raw, .. }) => {
            format!(
                r#"<div class="banner error">⚠️ Couldn't parse valid JSON. Here's the raw output:</div>
<pre class="artifact raw">{}</pre>"#,
                html_escape(&raw)
            )
        }
    };

    Html(html)
}
