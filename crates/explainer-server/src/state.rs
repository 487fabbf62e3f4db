//! Server state management

use explainer_core::{ExplainerConfig, ExplanationService};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: ExplainerConfig,
    pub service: Arc<ExplanationService>,
}

impl AppState {
    pub fn new(config: ExplainerConfig, service: ExplanationService) -> Self {
        Self {
            config,
            service: Arc::new(service),
        }
    }
}
