//! CLI command implementations.
//!
//! Each module wraps one service area; all of them open the shared store
//! through the crate configs, so every invocation sees the latest state.

use warung_admin::{AdminConfig, AdminState};
use warung_storage::StoreError;
use warung_storefront::{AppState, StorefrontConfig};

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod checkout;
pub mod orders;
pub mod reviews;
pub mod seed;

/// Open the storefront side of the store.
pub(crate) fn storefront() -> Result<AppState, StoreError> {
    AppState::new(StorefrontConfig::from_env())
}

/// Open the back-office side of the store.
pub(crate) fn admin() -> Result<AdminState, StoreError> {
    AdminState::new(AdminConfig::from_env())
}
