use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text-generation backend. Production wires a `GeminiClient`;
    /// tests script responses through the same seam.
    pub provider: Arc<dyn TextGenerator>,
}
