//! Admin state shared across services.

use std::sync::Arc;

use warung_storage::{KvStore, StoreError};

use crate::config::AdminConfig;

/// Admin state: configuration plus the open key-value store.
#[derive(Debug, Clone)]
pub struct AdminState {
    inner: Arc<AdminStateInner>,
}

#[derive(Debug)]
struct AdminStateInner {
    config: AdminConfig,
    store: KvStore,
}

impl AdminState {
    /// Create the state, opening the store under the configured data dir.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the data directory cannot be created.
    pub fn new(config: AdminConfig) -> Result<Self, StoreError> {
        let store = KvStore::open(&config.data_dir)?;
        Ok(Self {
            inner: Arc::new(AdminStateInner { config, store }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the key-value store.
    #[must_use]
    pub fn store(&self) -> &KvStore {
        &self.inner.store
    }
}
