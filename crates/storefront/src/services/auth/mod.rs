//! Session and account management.
//!
//! The session is two store keys: an authenticated flag and the signed-in
//! profile. Accounts live in a separate list with their password hashes.
//! Password verification goes through the [`CredentialVerifier`] trait so the
//! hashing scheme is a swappable boundary rather than something baked into
//! the service; [`Argon2Verifier`] is the production implementation.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::Utc;
use tracing::info;

use warung_core::{
    AccountStatus, Email, Password, ProfileUpdate, StoredPassword, UserAccount, UserId,
    UserProfile,
};
use warung_storage::{KvStore, keys};

pub mod error;

pub use error::AuthError;

/// Minimum password length at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum length for a replacement password.
pub const MIN_NEW_PASSWORD_LEN: usize = 8;

/// The credential-verification boundary.
///
/// Everything above this trait treats credentials as opaque: the service
/// hands plaintext in and gets a stored hash or a yes/no back.
pub trait CredentialVerifier {
    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Credential`] if hashing fails internally.
    fn hash(&self, password: &Password) -> Result<StoredPassword, AuthError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Credential`] if the stored hash is unparseable.
    fn verify(&self, password: &Password, stored: &StoredPassword) -> Result<bool, AuthError>;
}

/// Argon2id credential verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

impl CredentialVerifier for Argon2Verifier {
    fn hash(&self, password: &Password) -> Result<StoredPassword, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|_| AuthError::Credential)?;
        Ok(StoredPassword::new(hash.to_string()))
    }

    fn verify(&self, password: &Password, stored: &StoredPassword) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(stored.as_str()).map_err(|_| AuthError::Credential)?;
        Ok(Argon2::default()
            .verify_password(password.expose().as_bytes(), &parsed)
            .is_ok())
    }
}

/// The current session as rehydrated from the store.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Whether the session is signed in.
    pub authenticated: bool,
    /// Profile of the signed-in user, if any.
    pub user: Option<UserProfile>,
}

impl Session {
    /// The signed-in profile, or [`AuthError::NotAuthenticated`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] if the session is not signed
    /// in or the profile is missing.
    pub fn require_user(&self) -> Result<&UserProfile, AuthError> {
        if !self.authenticated {
            return Err(AuthError::NotAuthenticated);
        }
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }
}

/// A registration request.
#[derive(Debug)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Chosen password.
    pub password: Password,
    /// Confirmation; must match `password`.
    pub confirm: Password,
}

/// Service for sessions and accounts.
pub struct AuthService<'a, V = Argon2Verifier> {
    store: &'a KvStore,
    verifier: V,
}

impl<'a> AuthService<'a> {
    /// Create the service with the default Argon2 verifier.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self {
            store,
            verifier: Argon2Verifier,
        }
    }
}

impl<'a, V: CredentialVerifier> AuthService<'a, V> {
    /// Create the service with a custom credential verifier.
    #[must_use]
    pub const fn with_verifier(store: &'a KvStore, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// The current session, rehydrated from the store.
    #[must_use]
    pub fn session(&self) -> Session {
        Session {
            authenticated: self.store.get(keys::AUTH_FLAG).unwrap_or(false),
            user: self.store.get(keys::USER_PROFILE),
        }
    }

    /// Register a new account and sign the session in as it.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is invalid or taken, the password is
    /// shorter than [`MIN_PASSWORD_LEN`], the confirmation does not match,
    /// or the store write fails.
    pub fn register(&self, registration: Registration) -> Result<UserProfile, AuthError> {
        let email = Email::parse(&registration.email)?;

        let mut accounts: Vec<UserAccount> = self.store.get_or_default(keys::USER_ACCOUNTS);
        if accounts
            .iter()
            .any(|a| a.profile.email.as_str().eq_ignore_ascii_case(email.as_str()))
        {
            return Err(AuthError::EmailTaken);
        }

        if registration.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }
        if registration.password.expose() != registration.confirm.expose() {
            return Err(AuthError::PasswordMismatch);
        }

        let password = self.verifier.hash(&registration.password)?;
        let profile = UserProfile::new(UserId::generate(), registration.name, email);
        accounts.push(UserAccount {
            profile: profile.clone(),
            password,
            joined_at: Utc::now(),
            status: AccountStatus::Aktif,
        });
        self.store.set(keys::USER_ACCOUNTS, &accounts)?;
        self.sign_in(&profile)?;

        info!(user = %profile.id, "registered new account");
        Ok(profile)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown email or
    /// wrong password - deliberately the same error for both.
    pub fn login(&self, email: &str, password: &Password) -> Result<UserProfile, AuthError> {
        let accounts: Vec<UserAccount> = self.store.get_or_default(keys::USER_ACCOUNTS);
        let account = accounts
            .iter()
            .find(|a| a.profile.email.as_str().eq_ignore_ascii_case(email))
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verifier.verify(password, &account.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.sign_in(&account.profile)?;
        info!(user = %account.profile.id, "signed in");
        Ok(account.profile.clone())
    }

    /// Sign the session out: clears the auth flag, the profile, and the
    /// cart (an abandoned basket does not survive the owner leaving).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if a store write fails.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.set(keys::AUTH_FLAG, &false)?;
        self.store.remove(keys::USER_PROFILE)?;
        self.store.remove(keys::CART)?;
        info!("signed out");
        Ok(())
    }

    /// Apply a partial edit to the signed-in profile.
    ///
    /// The session copy and the account record are both updated.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session, or
    /// [`AuthError::Storage`] if a write fails.
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, AuthError> {
        let session = self.session();
        let mut profile = session.require_user()?.clone();
        update.apply(&mut profile);

        self.store.set(keys::USER_PROFILE, &profile)?;

        let mut accounts: Vec<UserAccount> = self.store.get_or_default(keys::USER_ACCOUNTS);
        if let Some(account) = accounts.iter_mut().find(|a| a.profile.id == profile.id) {
            account.profile = profile.clone();
            self.store.set(keys::USER_ACCOUNTS, &accounts)?;
        }

        Ok(profile)
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the current password is wrong, the new password
    /// is shorter than [`MIN_NEW_PASSWORD_LEN`], or the confirmation does
    /// not match.
    pub fn change_password(
        &self,
        current: &Password,
        new: &Password,
        confirm: &Password,
    ) -> Result<(), AuthError> {
        let session = self.session();
        let user_id = session.require_user()?.id.clone();

        let mut accounts: Vec<UserAccount> = self.store.get_or_default(keys::USER_ACCOUNTS);
        let account = accounts
            .iter_mut()
            .find(|a| a.profile.id == user_id)
            .ok_or(AuthError::AccountNotFound)?;

        if !self.verifier.verify(current, &account.password)? {
            return Err(AuthError::InvalidCredentials);
        }
        if new.len() < MIN_NEW_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min: MIN_NEW_PASSWORD_LEN,
            });
        }
        if new.expose() != confirm.expose() {
            return Err(AuthError::PasswordMismatch);
        }

        account.password = self.verifier.hash(new)?;
        self.store.set(keys::USER_ACCOUNTS, &accounts)?;
        info!(user = %user_id, "password changed");
        Ok(())
    }

    /// Delete the signed-in user's account and end the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session, or
    /// [`AuthError::Storage`] if a write fails.
    pub fn delete_account(&self) -> Result<(), AuthError> {
        let session = self.session();
        let user_id = session.require_user()?.id.clone();

        let mut accounts: Vec<UserAccount> = self.store.get_or_default(keys::USER_ACCOUNTS);
        accounts.retain(|a| a.profile.id != user_id);
        self.store.set(keys::USER_ACCOUNTS, &accounts)?;

        info!(user = %user_id, "account deleted");
        self.logout()
    }

    fn sign_in(&self, profile: &UserProfile) -> Result<(), AuthError> {
        self.store.set(keys::AUTH_FLAG, &true)?;
        self.store.set(keys::USER_PROFILE, profile)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, KvStore) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    fn registration(email: &str) -> Registration {
        Registration {
            name: "Budi Santoso".to_owned(),
            email: email.to_owned(),
            password: Password::new("rahasia-enam"),
            confirm: Password::new("rahasia-enam"),
        }
    }

    #[test]
    fn test_register_signs_session_in() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);

        let profile = auth.register(registration("budi@example.com")).unwrap();
        let session = auth.session();

        assert!(session.authenticated);
        assert_eq!(session.user.unwrap().id, profile.id);
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);

        auth.register(registration("budi@example.com")).unwrap();
        let err = auth
            .register(registration("BUDI@example.com"))
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);

        let err = auth
            .register(Registration {
                password: Password::new("lima5"),
                confirm: Password::new("lima5"),
                ..registration("budi@example.com")
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword { min: 6 }));
    }

    #[test]
    fn test_register_rejects_mismatched_confirmation() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);

        let err = auth
            .register(Registration {
                confirm: Password::new("sesuatu-lain"),
                ..registration("budi@example.com")
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
    }

    #[test]
    fn test_login_verifies_against_stored_hash() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);
        auth.register(registration("budi@example.com")).unwrap();
        auth.logout().unwrap();

        assert!(matches!(
            auth.login("budi@example.com", &Password::new("salah")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("tidak@ada.com", &Password::new("rahasia-enam")),
            Err(AuthError::InvalidCredentials)
        ));

        let profile = auth
            .login("budi@example.com", &Password::new("rahasia-enam"))
            .unwrap();
        assert_eq!(profile.name, "Budi Santoso");
        assert!(auth.session().authenticated);
    }

    #[test]
    fn test_logout_clears_session_and_cart() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);
        auth.register(registration("budi@example.com")).unwrap();
        store.set(keys::CART, &warung_core::Cart::default()).unwrap();

        auth.logout().unwrap();

        assert!(!auth.session().authenticated);
        assert!(auth.session().user.is_none());
        assert!(store.get::<warung_core::Cart>(keys::CART).is_none());
    }

    #[test]
    fn test_update_profile_syncs_account_record() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);
        auth.register(registration("budi@example.com")).unwrap();

        let updated = auth
            .update_profile(ProfileUpdate {
                phone: Some("0812".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(updated.phone, "0812");

        let accounts: Vec<UserAccount> = store.get_or_default(keys::USER_ACCOUNTS);
        assert_eq!(accounts.first().unwrap().profile.phone, "0812");
    }

    #[test]
    fn test_change_password_policy() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);
        auth.register(registration("budi@example.com")).unwrap();

        // wrong current password
        assert!(matches!(
            auth.change_password(
                &Password::new("salah"),
                &Password::new("delapan-88"),
                &Password::new("delapan-88"),
            ),
            Err(AuthError::InvalidCredentials)
        ));

        // new password too short (change requires 8)
        assert!(matches!(
            auth.change_password(
                &Password::new("rahasia-enam"),
                &Password::new("tujuh77"),
                &Password::new("tujuh77"),
            ),
            Err(AuthError::WeakPassword { min: 8 })
        ));

        auth.change_password(
            &Password::new("rahasia-enam"),
            &Password::new("delapan-88"),
            &Password::new("delapan-88"),
        )
        .unwrap();
        auth.logout().unwrap();
        assert!(
            auth.login("budi@example.com", &Password::new("delapan-88"))
                .is_ok()
        );
    }

    #[test]
    fn test_delete_account_removes_record_and_session() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);
        auth.register(registration("budi@example.com")).unwrap();

        auth.delete_account().unwrap();

        assert!(!auth.session().authenticated);
        let accounts: Vec<UserAccount> = store.get_or_default(keys::USER_ACCOUNTS);
        assert!(accounts.is_empty());
        assert!(matches!(
            auth.login("budi@example.com", &Password::new("rahasia-enam")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_operations_require_session() {
        let (_dir, store) = store();
        let auth = AuthService::new(&store);

        assert!(matches!(
            auth.update_profile(ProfileUpdate::default()),
            Err(AuthError::NotAuthenticated)
        ));
        assert!(matches!(
            auth.delete_account(),
            Err(AuthError::NotAuthenticated)
        ));
    }
}
