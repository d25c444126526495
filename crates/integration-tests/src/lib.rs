//! Integration tests for Warung Kencana.
//!
//! The tests in `tests/` drive full customer and admin journeys against a
//! real store in a temp directory - no mocks, the same code path the CLI
//! takes minus argument parsing.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p warung-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;

use warung_core::{Password, UserProfile, seed_menu};
use warung_storage::{KvStore, keys};
use warung_storefront::services::auth::{AuthService, Registration};

/// A fresh store in a temp directory, dropped with the test.
pub struct TestEnv {
    // held for its Drop; the directory lives as long as the env
    _dir: TempDir,
    store: KvStore,
}

impl TestEnv {
    /// Create an empty environment.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory or store cannot be created - in tests
    /// that is a setup failure worth failing loudly on.
    #[allow(clippy::unwrap_used)]
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        Self { _dir: dir, store }
    }

    /// Create an environment with the seed catalog materialized.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be written.
    #[allow(clippy::unwrap_used)]
    #[must_use]
    pub fn with_catalog() -> Self {
        let env = Self::new();
        env.store.set(keys::CATALOG, &seed_menu()).unwrap();
        env
    }

    /// The shared store.
    #[must_use]
    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Register and sign in a customer account.
    ///
    /// # Panics
    ///
    /// Panics if registration is refused.
    #[allow(clippy::unwrap_used)]
    pub fn sign_in_customer(&self, name: &str, email: &str) -> UserProfile {
        AuthService::new(&self.store)
            .register(Registration {
                name: name.to_owned(),
                email: email.to_owned(),
                password: Password::new("rahasia-enam"),
                confirm: Password::new("rahasia-enam"),
            })
            .unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
