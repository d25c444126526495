//! The admin side of customer messaging.
//!
//! Admins see every thread; a reply bumps the customer-side unread counter,
//! which the storefront clears when the customer opens the thread.

use chrono::Utc;
use tracing::info;

use warung_core::{ChatRole, ChatThread, ThreadId};
use warung_storage::{KvStore, StoreError, keys};

/// Errors raised by admin chat operations.
#[derive(Debug, thiserror::Error)]
pub enum AdminChatError {
    /// The referenced thread does not exist.
    #[error("unknown thread: {0}")]
    UnknownThread(ThreadId),

    /// Message with no text.
    #[error("message cannot be empty")]
    EmptyMessage,

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Service for replying to customer threads.
pub struct AdminChatService<'a> {
    store: &'a KvStore,
}

impl<'a> AdminChatService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All threads, in creation order.
    #[must_use]
    pub fn threads(&self) -> Vec<ChatThread> {
        self.store.get_or_default(keys::CHAT_THREADS)
    }

    /// One thread by ID.
    #[must_use]
    pub fn thread(&self, id: &ThreadId) -> Option<ChatThread> {
        self.threads().into_iter().find(|t| t.id == *id)
    }

    /// Reply to a thread as the admin.
    ///
    /// # Errors
    ///
    /// Refused for an empty message or an unknown thread ID.
    pub fn reply(&self, id: &ThreadId, text: &str) -> Result<ChatThread, AdminChatError> {
        if text.trim().is_empty() {
            return Err(AdminChatError::EmptyMessage);
        }

        let mut threads = self.threads();
        let thread = threads
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| AdminChatError::UnknownThread(id.clone()))?;

        thread.push(ChatRole::Admin, text.to_owned(), Utc::now());
        thread.unread += 1;
        let updated = thread.clone();
        self.store.set(keys::CHAT_THREADS, &threads)?;

        info!(thread = %id, "admin replied");
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use warung_core::{Email, UserId, UserProfile};

    fn store_with_thread() -> (TempDir, KvStore, ThreadId) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        let user = UserProfile::new(
            UserId::new("usr-1"),
            "Budi Santoso".to_owned(),
            Email::parse("budi@example.com").unwrap(),
        );
        let thread = ChatThread::open(&user, Utc::now());
        let id = thread.id.clone();
        store.set(keys::CHAT_THREADS, &vec![thread]).unwrap();
        (dir, store, id)
    }

    #[test]
    fn test_reply_appends_and_bumps_unread() {
        let (_dir, store, id) = store_with_thread();
        let admin = AdminChatService::new(&store);

        let thread = admin.reply(&id, "Pesanan sedang disiapkan ya kak.").unwrap();

        assert_eq!(thread.unread, 1);
        let last = thread.last_message().unwrap();
        assert_eq!(last.role, ChatRole::Admin);

        // persisted
        assert_eq!(admin.thread(&id).unwrap().unread, 1);
    }

    #[test]
    fn test_reply_unknown_thread() {
        let (_dir, store, _id) = store_with_thread();
        let err = AdminChatService::new(&store)
            .reply(&ThreadId::new("chat-hilang"), "Halo")
            .unwrap_err();
        assert!(matches!(err, AdminChatError::UnknownThread(_)));
    }

    #[test]
    fn test_reply_rejects_empty() {
        let (_dir, store, id) = store_with_thread();
        let err = AdminChatService::new(&store).reply(&id, " ").unwrap_err();
        assert!(matches!(err, AdminChatError::EmptyMessage));
    }
}
