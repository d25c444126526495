//! Chat commands (customer side).

use tracing::info;

use warung_core::ChatThread;
use warung_storefront::services::ChatService;

pub(crate) fn print_thread(thread: &ChatThread) {
    info!("Thread {} ({})", thread.id, thread.user_name);
    for message in &thread.messages {
        info!(
            "  [{}] {:?}: {}",
            message.sent_at.format("%H:%M"),
            message.role,
            message.text
        );
    }
}

/// Show the conversation with the shop; opening it marks it read.
///
/// # Errors
///
/// Returns an error without a session.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let thread = ChatService::new(state.store()).open_thread()?;
    print_thread(&thread);
    Ok(())
}

/// Send a message to the shop.
///
/// # Errors
///
/// Returns an error without a session or for an empty message.
pub fn send(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let thread = ChatService::new(state.store()).send(text)?;
    print_thread(&thread);
    Ok(())
}
