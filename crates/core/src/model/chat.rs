//! Customer-to-admin message threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserProfile;
use crate::types::{ChatRole, ThreadId, UserId};

/// One message inside a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent it.
    pub role: ChatRole,
    /// Message text.
    pub text: String,
    /// When it was sent.
    pub sent_at: DateTime<Utc>,
}

/// A customer's conversation with the admin actor.
///
/// One thread per customer. The unread counter tracks admin messages the
/// customer has not yet opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatThread {
    /// Thread ID, derived from the customer's user ID.
    pub id: ThreadId,
    /// The customer side of the thread.
    pub user_id: UserId,
    /// Customer name at thread creation.
    pub user_name: String,
    /// Messages, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Admin messages the customer has not read yet.
    pub unread: u32,
}

impl ChatThread {
    /// Text of the synthetic message that opens every thread.
    pub const OPENER: &'static str = "Percakapan dimulai.";

    /// Open a new thread for `user` with the system opener.
    #[must_use]
    pub fn open(user: &UserProfile, now: DateTime<Utc>) -> Self {
        Self {
            id: ThreadId::for_user(&user.id),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            messages: vec![ChatMessage {
                role: ChatRole::System,
                text: Self::OPENER.to_owned(),
                sent_at: now,
            }],
            unread: 0,
        }
    }

    /// Append a message.
    pub fn push(&mut self, role: ChatRole, text: String, sent_at: DateTime<Utc>) {
        self.messages.push(ChatMessage { role, text, sent_at });
    }

    /// The newest message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
