//! Session lifecycle: register, login, logout, profile, teardown.

#![allow(clippy::unwrap_used)]

use warung_core::{Password, ProductId, ProfileUpdate};
use warung_integration_tests::TestEnv;
use warung_storage::keys;
use warung_storefront::services::auth::{AuthError, AuthService};
use warung_storefront::services::{CartService, CatalogService};

#[test]
fn session_survives_rehydration() {
    let env = TestEnv::with_catalog();
    let profile = env.sign_in_customer("Budi Santoso", "budi@example.com");

    // A second service over the same store (a "reload") sees the session.
    let session = AuthService::new(env.store()).session();
    assert!(session.authenticated);
    assert_eq!(session.user.unwrap().id, profile.id);
}

#[test]
fn logout_tears_down_session_and_cart() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");

    let geprek = CatalogService::new(env.store())
        .product(&ProductId::new("ayam-geprek-original"))
        .unwrap();
    CartService::new(env.store()).add(&geprek, 2).unwrap();

    AuthService::new(env.store()).logout().unwrap();

    let session = AuthService::new(env.store()).session();
    assert!(!session.authenticated);
    assert!(session.user.is_none());
    assert!(CartService::new(env.store()).cart().is_empty());
    // The auth flag persists as an explicit false.
    assert_eq!(env.store().get::<bool>(keys::AUTH_FLAG), Some(false));
}

#[test]
fn relogin_after_logout() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    let auth = AuthService::new(env.store());
    auth.logout().unwrap();

    let profile = auth
        .login("budi@example.com", &Password::new("rahasia-enam"))
        .unwrap();
    assert_eq!(profile.name, "Budi Santoso");
    assert!(auth.session().authenticated);
}

#[test]
fn profile_edit_flows_into_next_login() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    let auth = AuthService::new(env.store());

    auth.update_profile(ProfileUpdate {
        city: Some("Bandung".to_owned()),
        profile_status: Some("Mahasiswa".to_owned()),
        ..ProfileUpdate::default()
    })
    .unwrap();
    auth.logout().unwrap();

    let profile = auth
        .login("budi@example.com", &Password::new("rahasia-enam"))
        .unwrap();
    assert_eq!(profile.city, "Bandung");
    assert_eq!(profile.profile_status, "Mahasiswa");
}

#[test]
fn password_change_invalidates_the_old_password() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    let auth = AuthService::new(env.store());

    auth.change_password(
        &Password::new("rahasia-enam"),
        &Password::new("rahasia-delapan"),
        &Password::new("rahasia-delapan"),
    )
    .unwrap();
    auth.logout().unwrap();

    assert!(matches!(
        auth.login("budi@example.com", &Password::new("rahasia-enam")),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(
        auth.login("budi@example.com", &Password::new("rahasia-delapan"))
            .is_ok()
    );
}

#[test]
fn deleted_account_cannot_sign_back_in() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    let auth = AuthService::new(env.store());

    auth.delete_account().unwrap();

    assert!(!auth.session().authenticated);
    assert!(matches!(
        auth.login("budi@example.com", &Password::new("rahasia-enam")),
        Err(AuthError::InvalidCredentials)
    ));
}
