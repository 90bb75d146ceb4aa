/// LLM Client: the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// All LLM interactions MUST go through this module.
///
/// Two interchangeable backends exist. Which one serves requests is decided once,
/// at startup, from the configured credentials:
/// 1. `EMERGENT_LLM_KEY` → Emergent (OpenAI gpt-4o via the Emergent gateway)
/// 2. `GEMINI_API_KEY`   → Google Gemini (gemini-1.5-flash)
/// 3. neither            → every call fails with `LlmError::NotConfigured`
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

pub mod emergent;
pub mod gemini;
pub mod prompts;

pub use emergent::EmergentClient;
pub use gemini::GeminiClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No LLM key found. Please set EMERGENT_LLM_KEY or GEMINI_API_KEY")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Text in, text out. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, instruction: &str) -> Result<String, LlmError>;
}

/// The configured backend, selected once from the available credentials.
#[derive(Clone)]
pub enum LlmClient {
    Emergent(EmergentClient),
    Gemini(GeminiClient),
    Unconfigured,
}

impl LlmClient {
    /// Picks the primary backend if its key is set, else the secondary, else none.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        if let Some(key) = &config.emergent_llm_key {
            return Ok(LlmClient::Emergent(EmergentClient::new(
                http_client()?,
                key.clone(),
                config.emergent_base_url.clone(),
            )));
        }
        if let Some(key) = &config.gemini_api_key {
            return Ok(LlmClient::Gemini(GeminiClient::new(
                http_client()?,
                key.clone(),
                config.gemini_base_url.clone(),
            )));
        }
        Ok(LlmClient::Unconfigured)
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            LlmClient::Emergent(_) => "emergent",
            LlmClient::Gemini(_) => "gemini",
            LlmClient::Unconfigured => "none",
        }
    }

    pub fn model(&self) -> Option<&'static str> {
        match self {
            LlmClient::Emergent(_) => Some(emergent::MODEL),
            LlmClient::Gemini(_) => Some(gemini::MODEL),
            LlmClient::Unconfigured => None,
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, instruction: &str) -> Result<String, LlmError> {
        match self {
            LlmClient::Emergent(client) => client.generate(instruction).await,
            LlmClient::Gemini(client) => client.generate(instruction).await,
            LlmClient::Unconfigured => Err(LlmError::NotConfigured),
        }
    }
}

fn http_client() -> Result<Client, LlmError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Error envelope shared by both providers: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Turns a non-2xx response into `LlmError::Api`, preferring the provider's own message.
async fn api_error(response: reqwest::Response) -> LlmError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api { status, message }
}
