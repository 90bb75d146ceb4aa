use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::PromptStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PromptStore>,
    /// Backend chosen at startup from the configured credentials.
    pub llm: Arc<dyn TextGenerator>,
}
