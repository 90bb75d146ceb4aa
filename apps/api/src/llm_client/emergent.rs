//! Emergent gateway backend: OpenAI-compatible chat completions behind a
//! single universal key.

use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::prompts::{OPTIMIZER_SYSTEM, SESSION_ID};
use super::{api_error, LlmError};

pub const MODEL_PROVIDER: &str = "openai";
/// Hardcoded to prevent drift.
pub const MODEL: &str = "gpt-4o";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    metadata: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Clone)]
pub struct EmergentClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl EmergentClient {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends `instruction` as the single user turn of the `prompt_optimizer` session.
    pub async fn generate(&self, instruction: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: OPTIMIZER_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: instruction,
                },
            ],
            metadata: json!({
                "session_id": SESSION_ID,
                "provider": MODEL_PROVIDER,
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: Value = response.json().await?;
        let text = extract_text(body).ok_or(LlmError::EmptyContent)?;

        debug!("Emergent call succeeded: {} chars", text.len());
        Ok(text)
    }
}

/// Normalizes the gateway's reply to plain text.
///
/// Structured replies carry the text under `output.text`, or under
/// `choices[0].message.content` for OpenAI-shaped completions. A bare JSON
/// string is used as-is and other scalars are rendered to text. `None` when
/// nothing usable is present.
pub fn extract_text(body: Value) -> Option<String> {
    match body {
        Value::Object(_) => body
            .pointer("/output/text")
            .or_else(|| body.pointer("/choices/0/message/content"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(text) => Some(text),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
