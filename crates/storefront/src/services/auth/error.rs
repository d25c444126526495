//! Authentication error types.

use thiserror::Error;

use warung_storage::StoreError;

/// Errors that can occur during session and account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] warung_core::EmailError),

    /// Wrong password or no account with that email.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// Password shorter than the policy minimum.
    #[error("password must be at least {min} characters")]
    WeakPassword {
        /// Minimum length for this operation.
        min: usize,
    },

    /// Password and confirmation do not match.
    #[error("password confirmation does not match")]
    PasswordMismatch,

    /// Operation requires a signed-in session.
    #[error("not signed in")]
    NotAuthenticated,

    /// The session references an account that no longer exists.
    #[error("account not found")]
    AccountNotFound,

    /// Password hashing or verification failed internally.
    #[error("credential processing failed")]
    Credential,

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
