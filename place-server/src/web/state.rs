//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::ResolutionEngine;
use crate::provider::ProviderClient;

/// Shared application state.
///
/// Handlers receive this explicitly through axum's `State` extractor; there
/// is no process-wide engine.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ResolutionEngine<ProviderClient>>,
}

impl AppState {
    pub fn new(engine: ResolutionEngine<ProviderClient>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
