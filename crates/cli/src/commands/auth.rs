//! Session and account commands.

use tracing::info;

use warung_core::{Password, ProfileUpdate};
use warung_storefront::services::auth::{AuthService, Registration};

/// Register a new account and sign in.
///
/// # Errors
///
/// Returns an error if registration is refused (invalid email, weak
/// password, mismatched confirmation, taken email).
pub fn register(
    name: String,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let profile = AuthService::new(state.store()).register(Registration {
        name,
        email: email.to_owned(),
        password: Password::new(password),
        confirm: Password::new(confirm),
    })?;

    info!("Welcome, {}! Signed in as {}", profile.name, profile.email);
    Ok(())
}

/// Sign in.
///
/// # Errors
///
/// Returns an error for invalid credentials.
pub fn login(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let profile = AuthService::new(state.store()).login(email, &Password::new(password))?;

    info!("Signed in as {} ({})", profile.name, profile.role);
    Ok(())
}

/// Sign out.
///
/// # Errors
///
/// Returns an error if a store write fails.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    AuthService::new(state.store()).logout()?;

    info!("Signed out");
    Ok(())
}

/// Show the current session.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn whoami() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let session = AuthService::new(state.store()).session();

    match session.require_user() {
        Ok(user) => {
            info!("Signed in as {} <{}>", user.name, user.email);
            info!("  Role: {}", user.role);
            if !user.phone.is_empty() {
                info!("  Phone: {}", user.phone);
            }
            if !user.address.is_empty() {
                info!(
                    "  Address: {}, {} {}",
                    user.address, user.city, user.postal_code
                );
            }
        }
        Err(_) => info!("Not signed in"),
    }
    Ok(())
}

/// Update profile fields.
///
/// # Errors
///
/// Returns an error without a session or if a write fails.
pub fn update_profile(
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
    profile_status: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let profile = AuthService::new(state.store()).update_profile(ProfileUpdate {
        name,
        phone,
        address,
        city,
        postal_code,
        avatar: None,
        profile_status,
    })?;

    info!("Profile updated for {}", profile.email);
    Ok(())
}

/// Change the password.
///
/// # Errors
///
/// Returns an error if the current password is wrong or the new one fails
/// policy.
pub fn change_password(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    AuthService::new(state.store()).change_password(
        &Password::new(current),
        &Password::new(new),
        &Password::new(confirm),
    )?;

    info!("Password changed");
    Ok(())
}

/// Delete the signed-in account.
///
/// # Errors
///
/// Returns an error without a session or if a write fails.
pub fn delete_account() -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    AuthService::new(state.store()).delete_account()?;

    info!("Account deleted");
    Ok(())
}
