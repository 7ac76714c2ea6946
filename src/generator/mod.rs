// flowgen — Generation pipeline
//
// Three sequential stages: prompt builder, completion client,
// extractor/validator. One user action triggers one request; every
// outcome is terminal for that invocation.

pub mod extract;
pub mod prompt;

use crate::config::GeneratorConfig;
use crate::provider::CompletionProvider;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// Empty or whitespace-only description. No request is issued.
    #[error("workflow description is empty")]
    EmptyDescription,
    /// Transport, authentication, or service-side failure. Carries the
    /// underlying error text; no payload is produced.
    #[error("{0}")]
    Request(anyhow::Error),
}

/// Outcome of a completed request/response round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The payload parsed as JSON; `pretty` is its 2-space-indented
    /// re-serialization.
    Parsed { pretty: String },
    /// The payload did not parse. `raw` is the unwrapped candidate text,
    /// unmodified, for manual inspection.
    Unparsed { raw: String, error: String },
}

/// Runs the generation pipeline against an injected completion provider.
pub struct Generator {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    temperature: f64,
}

impl Generator {
    pub fn new(provider: Arc<dyn CompletionProvider>, cfg: &GeneratorConfig) -> Self {
        Self {
            provider,
            model: cfg.model.clone(),
            temperature: cfg.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one description through the full pipeline.
    ///
    /// Blocks on the network round-trip; no retry, no timeout beyond the
    /// provider's own defaults. Note that a parse failure is a successful
    /// `Generation`, not an error: the raw text is part of the result.
    pub async fn generate(&self, description: &str) -> Result<Generation, GenerateError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GenerateError::EmptyDescription);
        }

        let messages = prompt::build(description);

        tracing::info!(model = %self.model, "Requesting workflow generation");
        let content = self
            .provider
            .complete(&messages, &self.model, self.temperature)
            .await
            .map_err(GenerateError::Request)?;

        let payload = extract::extract_payload(&content);
        match extract::pretty_json(payload) {
            Ok(pretty) => {
                tracing::info!(bytes = pretty.len(), "Generated workflow parsed as JSON");
                Ok(Generation::Parsed { pretty })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Completion output is not valid JSON");
                Ok(Generation::Unparsed {
                    raw: payload.to_string(),
                    error: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Message;
    use async_trait::async_trait;

    /// Canned provider for pipeline tests; records nothing, returns a
    /// fixed response or error.
    struct FakeProvider {
        response: Result<String, String>,
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(
            &self,
            _messages: &[Message],
            _model: &str,
            _temperature: f64,
        ) -> anyhow::Result<String> {
            match &self.response {
                Ok(s) => Ok(s.trim().to_string()),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        }
    }

    fn generator(response: Result<&str, &str>) -> Generator {
        let provider = Arc::new(FakeProvider {
            response: response.map(String::from).map_err(String::from),
        });
        Generator::new(provider, &GeneratorConfig::default())
    }

    #[tokio::test]
    async fn test_empty_description_sends_no_request() {
        // A provider that would fail loudly if ever called.
        let gen = generator(Err("must not be called"));
        for input in ["", "   ", "\n\t "] {
            let err = gen.generate(input).await.unwrap_err();
            assert!(matches!(err, GenerateError::EmptyDescription));
        }
    }

    #[tokio::test]
    async fn test_fenced_json_is_pretty_printed() {
        let gen = generator(Ok("```json\n{\"nodes\":[],\"connections\":{}}\n```"));
        let out = gen.generate("notify me on new email").await.unwrap();
        match out {
            Generation::Parsed { pretty } => {
                let v: serde_json::Value = serde_json::from_str(&pretty).unwrap();
                assert_eq!(v, serde_json::json!({"nodes": [], "connections": {}}));
                assert!(pretty.contains("\n  \"nodes\""));
            }
            other => panic!("expected Parsed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plain_text_reaches_parse_failed() {
        let gen = generator(Ok("Sorry, I cannot help with that."));
        let out = gen.generate("do a thing").await.unwrap();
        match out {
            Generation::Unparsed { raw, error } => {
                assert_eq!(raw, "Sorry, I cannot help with that.");
                assert!(!error.is_empty());
            }
            other => panic!("expected Unparsed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_failure_carries_error_text() {
        let gen = generator(Err("connection refused"));
        let err = gen.generate("do a thing").await.unwrap_err();
        match err {
            GenerateError::Request(e) => {
                assert!(e.to_string().contains("connection refused"));
            }
            other => panic!("expected Request, got {:?}", other),
        }
    }
}
