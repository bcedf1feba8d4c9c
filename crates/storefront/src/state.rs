//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::selection::SelectionController;
use crate::storage::ExpiringStore;
use crate::viacep::ViaCepClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the product catalog, and the
/// selection controller.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    selection: SelectionController,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The selection controller is seeded from `cache` immediately, so
    /// construction performs the initial cache reads.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, cache: ExpiringStore) -> Self {
        let viacep = ViaCepClient::new(&config.viacep);
        let selection = SelectionController::load(catalog, cache, viacep);

        Self {
            inner: Arc::new(AppStateInner { config, selection }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.inner.selection.catalog()
    }

    /// Get a reference to the selection controller.
    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.inner.selection
    }
}
