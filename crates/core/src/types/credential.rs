//! Credential types.
//!
//! A [`Password`] is plaintext in flight - it never lands in the store and
//! never appears in logs. A [`StoredPassword`] is the PHC-format hash that
//! does get persisted with the account record.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// A plaintext password on its way to being hashed or verified.
///
/// Wraps [`SecretString`] so the value is excluded from `Debug` output and
/// zeroized on drop. Only credential verifiers should call
/// [`Password::expose`].
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    /// Wrap a plaintext password.
    #[must_use]
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(SecretString::from(plaintext.into()))
    }

    /// Number of characters, for policy checks without exposing the value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    /// Whether the password is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Expose the plaintext. Restricted to hashing and verification.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl From<&str> for Password {
    fn from(plaintext: &str) -> Self {
        Self::new(plaintext)
    }
}

/// A hashed password in PHC string format, as persisted with an account.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StoredPassword(String);

impl StoredPassword {
    /// Wrap an already-hashed PHC string.
    #[must_use]
    pub const fn new(hash: String) -> Self {
        Self(hash)
    }

    /// The PHC string, for verification.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for StoredPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoredPassword([REDACTED])")
    }
}
