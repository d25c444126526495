//! Warung Kencana Core - Shared types and domain models.
//!
//! This crate provides the common vocabulary used across all Warung Kencana
//! components:
//! - `storefront` - Customer-facing cart, checkout, and session services
//! - `admin` - Back-office order, product, and user management
//! - `cli` - Command-line front end driving both sides
//!
//! # Architecture
//!
//! The core crate contains only types and domain logic - no I/O and no
//! persistence access. Everything that touches the key-value store lives in
//! the service crates; what lives here is the part that can be reasoned about
//! (and tested) without a data directory.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, credentials, and status enums
//! - [`model`] - Domain models: products, carts, orders, users, reviews, chat

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod model;
pub mod types;

pub use model::*;
pub use types::*;
