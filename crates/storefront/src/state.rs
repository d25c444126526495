//! Application state shared across services.

use std::sync::Arc;

use warung_storage::{KvStore, StoreError};

use crate::config::StorefrontConfig;

/// Storefront state: configuration plus the open key-value store.
///
/// Cheaply cloneable via `Arc`. This is the explicit context object every
/// service hangs off - there is no ambient global; whoever needs the store
/// gets handed one of these.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    store: KvStore,
}

impl AppState {
    /// Create the state, opening the store under the configured data dir.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store = KvStore::open(&config.data_dir)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, store }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the key-value store.
    #[must_use]
    pub fn store(&self) -> &KvStore {
        &self.inner.store
    }
}
