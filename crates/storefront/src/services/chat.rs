//! Customer-to-admin messaging.
//!
//! One thread per customer, stored in a single list the admin side reads in
//! full. A customer message immediately receives the canned acknowledgment -
//! there is no background worker to deliver it later, so it is appended in
//! the same synchronous write.

use chrono::Utc;
use tracing::info;

use warung_core::{ChatRole, ChatThread, ThreadId};
use warung_storage::{KvStore, StoreError, keys};

use super::auth::AuthService;

/// Canned acknowledgment appended after every customer message.
pub const AUTO_REPLY: &str =
    "Terima kasih atas pesan Anda. Admin kami akan segera merespons.";

/// Errors that refuse a chat operation.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The session is not signed in.
    #[error("chat requires a signed-in session")]
    NotAuthenticated,

    /// Message with no text.
    #[error("message cannot be empty")]
    EmptyMessage,

    /// The referenced thread does not exist.
    #[error("unknown thread: {0}")]
    UnknownThread(ThreadId),

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Service for the customer side of the message channel.
///
/// The admin side (listing all threads, replying) lives in the admin crate;
/// both operate on the same stored thread list.
pub struct ChatService<'a> {
    store: &'a KvStore,
}

impl<'a> ChatService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// The signed-in customer's thread, created with the system opener on
    /// first access. Opening the thread clears its unread counter.
    ///
    /// # Errors
    ///
    /// Refused without a session; [`ChatError::Storage`] if the write fails.
    pub fn open_thread(&self) -> Result<ChatThread, ChatError> {
        let session = AuthService::new(self.store).session();
        let user = session
            .require_user()
            .map_err(|_| ChatError::NotAuthenticated)?;

        let mut threads = self.threads();
        let id = ThreadId::for_user(&user.id);

        if let Some(thread) = threads.iter_mut().find(|t| t.id == id) {
            thread.unread = 0;
            let opened = thread.clone();
            self.store.set(keys::CHAT_THREADS, &threads)?;
            return Ok(opened);
        }

        let thread = ChatThread::open(user, Utc::now());
        threads.push(thread.clone());
        self.store.set(keys::CHAT_THREADS, &threads)?;
        info!(thread = %thread.id, "chat thread opened");
        Ok(thread)
    }

    /// Send a message as the signed-in customer.
    ///
    /// Appends the message and the canned acknowledgment, and returns the
    /// updated thread.
    ///
    /// # Errors
    ///
    /// Refused without a session or for an empty message.
    pub fn send(&self, text: &str) -> Result<ChatThread, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        // ensure the thread exists before appending
        let opened = self.open_thread()?;

        let mut threads = self.threads();
        let thread = threads
            .iter_mut()
            .find(|t| t.id == opened.id)
            .ok_or_else(|| ChatError::UnknownThread(opened.id.clone()))?;

        let now = Utc::now();
        thread.push(ChatRole::Customer, text.to_owned(), now);
        thread.push(ChatRole::Admin, AUTO_REPLY.to_owned(), now);
        let updated = thread.clone();
        self.store.set(keys::CHAT_THREADS, &threads)?;
        Ok(updated)
    }

    fn threads(&self) -> Vec<ChatThread> {
        self.store.get_or_default(keys::CHAT_THREADS)
    }
}

/// Build the WhatsApp confirmation text for an order, used by the
/// post-checkout summary when the shop has a WhatsApp number configured.
#[must_use]
pub fn order_confirmation_message(store_name: &str, order: &warung_core::Order) -> String {
    format!(
        "Halo {store_name}, saya ingin konfirmasi pesanan:\n\
         Nomor Pesanan: #{}\n\
         Nama: {}\n\
         Total: {}\n\
         Metode Pembayaran: {}\n\
         Mohon konfirmasi dan info lanjut mengenai pembayaran. Terima kasih!",
        order.short_id(),
        order.delivery.name,
        order.total,
        order.payment_method.label(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use warung_core::Password;

    use crate::services::auth::Registration;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn sign_in(store: &KvStore) -> UserProfile {
        AuthService::new(store)
            .register(Registration {
                name: "Budi Santoso".to_owned(),
                email: "budi@example.com".to_owned(),
                password: Password::new("rahasia-enam"),
                confirm: Password::new("rahasia-enam"),
            })
            .unwrap()
    }

    #[test]
    fn test_open_thread_requires_session() {
        let (_dir, store) = store();
        assert!(matches!(
            ChatService::new(&store).open_thread(),
            Err(ChatError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_open_thread_creates_once() {
        let (_dir, store) = store();
        let user = sign_in(&store);
        let chat = ChatService::new(&store);

        let first = chat.open_thread().unwrap();
        let second = chat.open_thread().unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.user_id, user.id);
        assert_eq!(second.messages.len(), 1); // just the opener
    }

    #[test]
    fn test_send_appends_message_and_auto_reply() {
        let (_dir, store) = store();
        sign_in(&store);
        let chat = ChatService::new(&store);

        let thread = chat.send("Halo, pesanan saya sudah dikirim?").unwrap();

        assert_eq!(thread.messages.len(), 3); // opener + customer + ack
        let last = thread.last_message().unwrap();
        assert_eq!(last.role, ChatRole::Admin);
        assert_eq!(last.text, AUTO_REPLY);
    }

    #[test]
    fn test_send_rejects_empty_message() {
        let (_dir, store) = store();
        sign_in(&store);
        assert!(matches!(
            ChatService::new(&store).send("   "),
            Err(ChatError::EmptyMessage)
        ));
    }

    #[test]
    fn test_open_thread_clears_unread() {
        let (_dir, store) = store();
        sign_in(&store);
        let chat = ChatService::new(&store);
        chat.send("Halo").unwrap();

        // simulate an admin reply bumping the unread counter
        let mut threads: Vec<ChatThread> = store.get_or_default(keys::CHAT_THREADS);
        threads.first_mut().unwrap().unread = 2;
        store.set(keys::CHAT_THREADS, &threads).unwrap();

        let opened = chat.open_thread().unwrap();
        assert_eq!(opened.unread, 0);
    }
}
