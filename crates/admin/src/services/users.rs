//! Account management.

use tracing::info;

use warung_core::{AccountStatus, Role, UserAccount, UserId};
use warung_storage::{KvStore, StoreError, keys};

/// Errors raised by account mutations.
#[derive(Debug, thiserror::Error)]
pub enum UserAdminError {
    /// No account with this ID.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// The admin view of all accounts.
pub struct UserAdmin<'a> {
    store: &'a KvStore,
}

impl<'a> UserAdmin<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All accounts, in registration order.
    #[must_use]
    pub fn accounts(&self) -> Vec<UserAccount> {
        self.store.get_or_default(keys::USER_ACCOUNTS)
    }

    /// Accounts whose name or email contains `term`, case-insensitively.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<UserAccount> {
        let needle = term.to_lowercase();
        self.accounts()
            .into_iter()
            .filter(|a| {
                a.profile.name.to_lowercase().contains(&needle)
                    || a.profile.email.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// One account by user ID.
    #[must_use]
    pub fn account(&self, id: &UserId) -> Option<UserAccount> {
        self.accounts().into_iter().find(|a| a.profile.id == *id)
    }

    /// Change an account's role.
    ///
    /// # Errors
    ///
    /// Returns [`UserAdminError::UnknownUser`] for a missing ID.
    pub fn set_role(&self, id: &UserId, role: Role) -> Result<UserAccount, UserAdminError> {
        self.mutate(id, |account| account.profile.role = role)
    }

    /// Change an account's status label.
    ///
    /// # Errors
    ///
    /// Returns [`UserAdminError::UnknownUser`] for a missing ID.
    pub fn set_status(
        &self,
        id: &UserId,
        status: AccountStatus,
    ) -> Result<UserAccount, UserAdminError> {
        self.mutate(id, |account| account.status = status)
    }

    /// Delete an account.
    ///
    /// The user's orders and reviews keep their denormalized author fields;
    /// only the account record goes away.
    ///
    /// # Errors
    ///
    /// Returns [`UserAdminError::UnknownUser`] for a missing ID.
    pub fn delete(&self, id: &UserId) -> Result<(), UserAdminError> {
        let mut accounts = self.accounts();
        let before = accounts.len();
        accounts.retain(|a| a.profile.id != *id);
        if accounts.len() == before {
            return Err(UserAdminError::UnknownUser(id.clone()));
        }
        self.store.set(keys::USER_ACCOUNTS, &accounts)?;

        info!(user = %id, "account deleted by admin");
        Ok(())
    }

    fn mutate(
        &self,
        id: &UserId,
        apply: impl FnOnce(&mut UserAccount),
    ) -> Result<UserAccount, UserAdminError> {
        let mut accounts = self.accounts();
        let account = accounts
            .iter_mut()
            .find(|a| a.profile.id == *id)
            .ok_or_else(|| UserAdminError::UnknownUser(id.clone()))?;

        apply(account);
        let updated = account.clone();
        self.store.set(keys::USER_ACCOUNTS, &accounts)?;

        info!(user = %id, "account updated by admin");
        Ok(updated)
    }
}
