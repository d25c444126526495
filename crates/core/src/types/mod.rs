//! Core types for Warung Kencana.
//!
//! Type-safe wrappers for the domain concepts every crate shares.

pub mod credential;
pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use credential::{Password, StoredPassword};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use status::*;
