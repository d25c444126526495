//! Customer-facing services.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod checkout;
pub mod reviews;

pub use auth::{AuthService, Session};
pub use cart::CartService;
pub use catalog::CatalogService;
pub use chat::ChatService;
pub use checkout::{CheckoutRequest, CheckoutService};
pub use reviews::ReviewService;
