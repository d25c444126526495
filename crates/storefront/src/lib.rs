//! Warung Kencana storefront - the customer-facing half of the shop.
//!
//! Everything a shopper can do goes through the services in this crate:
//! browse the menu ([`services::catalog`]), manage a cart
//! ([`services::cart`]), check out ([`services::checkout`]), hold a session
//! ([`services::auth`]), write reviews ([`services::reviews`]), and message
//! the shop ([`services::chat`]).
//!
//! All services are thin stateless handles borrowing the shared
//! [`warung_storage::KvStore`]; state lives in the store, is reloaded at the
//! top of every operation, and is written back synchronously before the
//! operation returns. There is no caching layer and no background work, so a
//! mutation is visible to the next reader the moment the call returns.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod services;
pub mod state;

pub use config::StorefrontConfig;
pub use state::AppState;
