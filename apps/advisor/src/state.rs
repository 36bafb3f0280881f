use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::market::MarketData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production, a scripted stand-in in tests.
    pub generator: Arc<dyn TextGenerator>,
    /// Read-only market reference data, loaded once at startup.
    pub market: Arc<MarketData>,
}
