use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote model client, constructed once at startup and injected here
    /// instead of living as a module-level singleton.
    pub model: Arc<dyn ModelClient>,
    #[allow(dead_code)]
    pub config: Config,
}
