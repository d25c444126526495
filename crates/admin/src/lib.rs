//! Warung Kencana admin - the back-office half of the shop.
//!
//! Services for the administrative actor: the order status registry
//! ([`services::orders`]), catalog management ([`services::products`]),
//! account management ([`services::users`]), customer messaging
//! ([`services::chat`]), and dashboard stats ([`services::dashboard`]).
//!
//! Admin and storefront share one [`warung_storage::KvStore`]; an admin
//! mutation is visible to the storefront the moment the call returns, and
//! vice versa. There is no caching layer in between.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod services;
pub mod state;

pub use config::AdminConfig;
pub use state::AdminState;
