// flowgen — Completion provider abstraction

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// A chat-completion backend.
///
/// The credential and endpoint are injected at construction so tests can
/// substitute a fake implementation or point at a local mock server.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one request and return the first choice's message content with
    /// surrounding whitespace trimmed. Exactly one attempt per call: any
    /// transport, authentication, or service-side error is returned as-is,
    /// with no retry and no partial-result handling.
    async fn complete(
        &self,
        messages: &[Message],
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String>;
}
