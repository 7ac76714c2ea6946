// flowgen — HTTP chat-completion provider (OpenAI-compatible)

use super::{CompletionProvider, Message};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// HTTPProvider speaks the OpenAI-compatible chat completions API.
///
/// No request timeout is configured beyond the HTTP client's defaults, and
/// no retry is attempted: one user action maps to exactly one request.
pub struct HTTPProvider {
    api_key: String,
    api_base: String,
    client: Client,
}

impl HTTPProvider {
    pub fn new(api_key: String, api_base: String) -> Self {
        let base = if api_base.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            api_base
        };

        Self {
            api_key,
            api_base: base,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for HTTPProvider {
    async fn complete(
        &self,
        messages: &[Message],
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));

        let body = json!({
            "model": model,
            "messages": messages,
            "temperature": temperature,
        });

        tracing::debug!(url = %url, model = %model, temperature = temperature, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_body = response.text().await?;

        if !status.is_success() {
            anyhow::bail!("completion API error ({}): {}", status, response_body);
        }

        tracing::debug!(status = %status, body_len = response_body.len(), "Completion response received");
        parse_response(&response_body)
    }
}

/// Parse an OpenAI-compatible chat completion response, returning the first
/// choice's message content, trimmed.
fn parse_response(body: &str) -> anyhow::Result<String> {
    let v: serde_json::Value = serde_json::from_str(body)?;

    // Some backends return 200 with an error object
    if let Some(err) = v.get("error") {
        let msg = err
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        anyhow::bail!("completion API error: {}", msg);
    }

    let content = v
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| anyhow::anyhow!("no message content in completion response"))?;

    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_response() {
        let json = r#"{
            "choices": [{
                "message": {"role": "assistant", "content": "  {\"nodes\": []}  "},
                "finish_reason": "stop"
            }]
        }"#;

        let content = parse_response(json).unwrap();
        assert_eq!(content, "{\"nodes\": []}");
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"error": {"message": "Invalid API key", "type": "auth_error"}}"#;
        let result = parse_response(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid API key"));
    }

    #[test]
    fn test_parse_missing_choices() {
        let json = r#"{"choices": []}"#;
        assert!(parse_response(json).is_err());
    }

    #[test]
    fn test_api_base_default() {
        let p = HTTPProvider::new("sk-test".into(), String::new());
        assert_eq!(p.api_base, DEFAULT_API_BASE);

        let p = HTTPProvider::new("sk-test".into(), "http://localhost:9999/v1".into());
        assert_eq!(p.api_base, "http://localhost:9999/v1");
    }
}
