//! Back-office commands.

use tracing::info;

use warung_admin::services::products::{NewProduct, ProductUpdate};
use warung_admin::services::{
    AdminChatService, DashboardService, OrderRegistry, ProductAdmin, UserAdmin,
};
use warung_core::{OrderId, OrderStatus, ProductId, ThreadId, UserId};

/// List orders, optionally filtered by status.
///
/// # Errors
///
/// Returns an error for an unknown status name.
pub fn orders(status: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let registry = OrderRegistry::new(state.store());

    let orders = match status {
        Some(s) => registry.orders_with_status(s.parse::<OrderStatus>()?),
        None => registry.orders(),
    };
    if orders.is_empty() {
        info!("No orders");
        return Ok(());
    }
    for order in orders {
        info!(
            "{}  {}  {:<10}  {:>12}  {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.status.to_string(),
            order.total.to_string(),
            order.delivery.name
        );
    }
    Ok(())
}

/// Move an order to a new status.
///
/// With `force`, the pipeline check is skipped (manual correction).
///
/// # Errors
///
/// Returns an error for an unknown order, an unknown status name, or an
/// illegal transition without `force`.
pub fn set_status(id: &str, status: &str, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let registry = OrderRegistry::new(state.store());
    let id = OrderId::new(id);
    let next = status.parse::<OrderStatus>()?;

    let order = if force {
        registry.force_status(&id, next)?
    } else {
        registry.update_status(&id, next)?
    };

    info!("Order #{} is now {}", order.short_id(), order.status);
    Ok(())
}

/// List the catalog as the admin sees it.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn products_list() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    for product in ProductAdmin::new(state.store()).products() {
        info!(
            "{:<28} {:<14} {:>12}  {}",
            product.id.to_string(),
            product.category,
            product.price.to_string(),
            product.name
        );
    }
    Ok(())
}

/// Add a product.
///
/// # Errors
///
/// Returns an error for an empty name or a slug collision.
pub fn products_add(
    name: String,
    description: String,
    price: u64,
    category: String,
    image: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let product = ProductAdmin::new(state.store()).create(NewProduct {
        name,
        description,
        price_rupiah: price,
        category,
        image,
    })?;

    info!("Created {} ({})", product.id, product.price);
    Ok(())
}

/// Edit a product.
///
/// # Errors
///
/// Returns an error for an unknown product ID.
pub fn products_update(
    id: &str,
    name: Option<String>,
    description: Option<String>,
    price: Option<u64>,
    category: Option<String>,
    image: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let product = ProductAdmin::new(state.store()).update(
        &ProductId::new(id),
        ProductUpdate {
            name,
            description,
            price_rupiah: price,
            category,
            image,
        },
    )?;

    info!("Updated {} ({})", product.id, product.price);
    Ok(())
}

/// Remove a product.
///
/// # Errors
///
/// Returns an error for an unknown product ID.
pub fn products_delete(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    ProductAdmin::new(state.store()).delete(&ProductId::new(id))?;

    info!("Deleted {id}");
    Ok(())
}

/// List accounts, optionally filtered.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn users_list(search: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let admin = UserAdmin::new(state.store());
    let accounts = match search {
        Some(term) => admin.search(term),
        None => admin.accounts(),
    };
    if accounts.is_empty() {
        info!("No accounts");
        return Ok(());
    }
    for account in accounts {
        info!(
            "{}  {:<14} {:<22} {:<24} {}",
            account.profile.id,
            account.profile.role.to_string(),
            account.status.to_string(),
            account.profile.email.to_string(),
            account.profile.name
        );
    }
    Ok(())
}

/// Change an account's role.
///
/// # Errors
///
/// Returns an error for an unknown user or role name.
pub fn users_set_role(id: &str, role: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let account = UserAdmin::new(state.store()).set_role(&UserId::new(id), role.parse()?)?;

    info!("{} is now {}", account.profile.email, account.profile.role);
    Ok(())
}

/// Change an account's status label.
///
/// # Errors
///
/// Returns an error for an unknown user or status name.
pub fn users_set_status(id: &str, status: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let account = UserAdmin::new(state.store()).set_status(&UserId::new(id), status.parse()?)?;

    info!("{} is now {}", account.profile.email, account.status);
    Ok(())
}

/// Delete an account.
///
/// # Errors
///
/// Returns an error for an unknown user ID.
pub fn users_delete(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    UserAdmin::new(state.store()).delete(&UserId::new(id))?;

    info!("Deleted account {id}");
    Ok(())
}

/// List all chat threads.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn chat_list() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let threads = AdminChatService::new(state.store()).threads();
    if threads.is_empty() {
        info!("No conversations");
        return Ok(());
    }
    for thread in threads {
        let preview = thread
            .last_message()
            .map_or("", |m| m.text.as_str());
        info!(
            "{}  {:<20} unread: {:<3} {}",
            thread.id, thread.user_name, thread.unread, preview
        );
    }
    Ok(())
}

/// Reply to a thread as the admin.
///
/// # Errors
///
/// Returns an error for an unknown thread or an empty message.
pub fn chat_reply(thread: &str, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    AdminChatService::new(state.store()).reply(&ThreadId::new(thread), text)?;

    info!("Reply sent");
    Ok(())
}

/// Show dashboard stats.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn stats() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::admin()?;
    let stats = DashboardService::new(state.store()).stats();

    info!("Total orders: {}", stats.total_orders);
    info!("Total revenue: {}", stats.total_revenue);
    for (status, count) in stats.orders_by_status {
        info!("  {status}: {count}");
    }
    info!("Registered accounts: {}", stats.total_customers);
    info!("Unread messages: {}", stats.pending_messages);
    Ok(())
}
