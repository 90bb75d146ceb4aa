//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use crate::config::{Config, DEFAULT_EMERGENT_BASE_URL, DEFAULT_GEMINI_BASE_URL};
use crate::llm_client::{LlmError, TextGenerator};
use crate::state::AppState;
use crate::store::memory::MemoryPromptStore;

/// Config with no provider credentials.
pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        db_name: None,
        cors_origins: Vec::new(),
        emergent_llm_key: None,
        emergent_base_url: DEFAULT_EMERGENT_BASE_URL.to_string(),
        gemini_api_key: None,
        gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        port: 8001,
        rust_log: "debug".to_string(),
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_mock_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Generator returning a canned reply (or failure) and counting calls.
pub struct StubGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _instruction: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

pub fn test_state(
    llm: Arc<dyn TextGenerator>,
) -> (AppState, Arc<MemoryPromptStore>) {
    let store = Arc::new(MemoryPromptStore::default());
    let state = AppState {
        store: store.clone(),
        llm,
    };
    (state, store)
}
