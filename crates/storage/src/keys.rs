//! Well-known store keys.
//!
//! The full persisted state of the application is the union of these keys.
//! Storefront and admin read and write the same files; there is no other
//! channel between them.

/// `bool` - whether the current session is authenticated.
pub const AUTH_FLAG: &str = "auth";

/// `UserProfile` - the profile of the signed-in user.
pub const USER_PROFILE: &str = "user-profile";

/// `Cart` - the current session's cart.
pub const CART: &str = "cart";

/// `Order` - snapshot of the most recently placed order, for the
/// post-checkout summary.
pub const LATEST_ORDER: &str = "latest-order";

/// `Vec<Order>` - every order ever placed; the order status registry.
pub const ORDERS: &str = "orders";

/// `Vec<Product>` - admin-edited catalog. Absent until the first admin
/// edit; the built-in menu applies while it is absent.
pub const CATALOG: &str = "catalog";

/// `Vec<UserAccount>` - all registered accounts.
pub const USER_ACCOUNTS: &str = "user-accounts";

/// `Vec<Review>` - all product reviews.
pub const REVIEWS: &str = "reviews";

/// `Vec<ChatThread>` - all customer-admin conversations.
pub const CHAT_THREADS: &str = "chat-threads";
