//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the data-access store, the parsed config, and the viewer every
//! request is served as.

use std::sync::Arc;

use market::Viewer;

use crate::config::ServerConfig;
use crate::services::store::MarketStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MarketStore>,
    pub config: Arc<ServerConfig>,
    pub viewer: Arc<Viewer>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MarketStore>, config: ServerConfig) -> Self {
        let viewer = Arc::new(config.viewer.viewer());
        Self { store, config: Arc::new(config), viewer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
