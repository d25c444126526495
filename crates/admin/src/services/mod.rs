//! Back-office services.

pub mod chat;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod users;

pub use chat::AdminChatService;
pub use dashboard::{DashboardService, DashboardStats};
pub use orders::OrderRegistry;
pub use products::ProductAdmin;
pub use users::UserAdmin;
