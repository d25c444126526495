//! Domain models.
//!
//! Plain data plus the logic that can run without touching the store. The
//! cart aggregate in particular lives here so its invariants are enforced by
//! the type, not by whichever service happens to mutate it.

pub mod cart;
pub mod chat;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use cart::{Cart, CartLine};
pub use chat::{ChatMessage, ChatThread};
pub use order::{DeliveryDetails, Order};
pub use product::{Product, seed_menu};
pub use review::{Rating, RatingError, Review};
pub use user::{ProfileUpdate, UserAccount, UserProfile};
