//! Seed the store with the built-in menu and demo accounts.

use tracing::info;

use warung_admin::services::UserAdmin;
use warung_core::{Password, Role, seed_menu};
use warung_storage::keys;
use warung_storefront::services::auth::{AuthService, Registration};

/// Materialize the catalog and create two demo accounts.
///
/// Idempotent-ish: re-running resets the catalog to the seed menu and skips
/// accounts that already exist. Ends signed out.
///
/// # Errors
///
/// Returns an error if a store write fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let store = state.store();

    let menu = seed_menu();
    store.set(keys::CATALOG, &menu)?;
    info!("Catalog seeded with {} products", menu.len());

    let auth = AuthService::new(store);

    let demo = [
        ("Test User", "test@example.com", "password", Role::Customer),
        ("Admin Utama", "admin@example.com", "passwordadmin", Role::Admin),
    ];
    for (name, email, password, role) in demo {
        match auth.register(Registration {
            name: name.to_owned(),
            email: email.to_owned(),
            password: Password::new(password),
            confirm: Password::new(password),
        }) {
            Ok(profile) => {
                if role != Role::Customer {
                    UserAdmin::new(store).set_role(&profile.id, role)?;
                }
                info!("Created demo account {email} (password: {password})");
            }
            Err(warung_storefront::services::auth::AuthError::EmailTaken) => {
                info!("Demo account {email} already exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Seeding should not leave the session signed in as the last demo user.
    auth.logout()?;

    info!("Seed complete. Data dir: {}", store.root().display());
    Ok(())
}
