use std::sync::Arc;

use crate::llm_client::CompletionProvider;
use crate::storage::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient` (Anthropic Messages API).
    pub llm: Arc<dyn CompletionProvider>,
    /// Persistence collaborator. Default: `PgPortfolioStore`.
    pub store: Arc<dyn PortfolioStore>,
}
