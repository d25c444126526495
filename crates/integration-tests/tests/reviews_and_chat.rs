//! Reviews and the customer-admin message channel, end to end.

#![allow(clippy::unwrap_used)]

use warung_admin::services::{AdminChatService, OrderRegistry};
use warung_core::{
    ChatRole, DeliveryMethod, OrderStatus, PaymentMethod, ProductId, ProfileUpdate,
};
use warung_integration_tests::TestEnv;
use warung_storefront::services::auth::AuthService;
use warung_storefront::services::reviews::{NewReview, ReviewError};
use warung_storefront::services::{
    CartService, CatalogService, ChatService, CheckoutRequest, CheckoutService, ReviewService,
};

fn place_and_complete_order(env: &TestEnv, product_id: &str) {
    AuthService::new(env.store())
        .update_profile(ProfileUpdate {
            phone: Some("0812".to_owned()),
            address: Some("Jl. Melati 3".to_owned()),
            city: Some("Bandung".to_owned()),
            postal_code: Some("40111".to_owned()),
            ..ProfileUpdate::default()
        })
        .unwrap();

    let product = CatalogService::new(env.store())
        .product(&ProductId::new(product_id))
        .unwrap();
    CartService::new(env.store()).add(&product, 1).unwrap();

    let session = AuthService::new(env.store()).session();
    let order = CheckoutService::new(env.store())
        .submit(CheckoutRequest {
            delivery: warung_core::DeliveryDetails::from_profile(session.user.as_ref().unwrap()),
            delivery_method: DeliveryMethod::Regular,
            payment_method: PaymentMethod::CashOnDelivery,
            notes: String::new(),
        })
        .unwrap();

    let registry = OrderRegistry::new(env.store());
    registry.update_status(&order.id, OrderStatus::Dikirim).unwrap();
    registry.update_status(&order.id, OrderStatus::Selesai).unwrap();
}

#[test]
fn review_gate_opens_when_the_order_completes() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    let reviews = ReviewService::new(env.store());

    // Nothing purchased yet: refused.
    let err = reviews
        .submit(NewReview {
            product_id: ProductId::new("mie-ayam-original"),
            rating: 5,
            comment: "Juara!".to_owned(),
            photos: Vec::new(),
        })
        .unwrap_err();
    assert!(matches!(err, ReviewError::NotPurchased));

    place_and_complete_order(&env, "mie-ayam-original");

    // The gate only opens for the purchased product.
    assert!(reviews.can_review(&ProductId::new("mie-ayam-original")));
    assert!(!reviews.can_review(&ProductId::new("soto-ayam")));

    let review = reviews
        .submit(NewReview {
            product_id: ProductId::new("mie-ayam-original"),
            rating: 5,
            comment: "Kuahnya kental, ayamnya banyak. Juara!".to_owned(),
            photos: vec!["foto-review-1".to_owned()],
        })
        .unwrap();
    assert_eq!(review.product_name, "Mie Ayam Original");
    assert_eq!(review.user_name, "Budi Santoso");
}

#[test]
fn helpful_votes_dedupe_across_users() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    place_and_complete_order(&env, "mie-ayam-original");

    let reviews = ReviewService::new(env.store());
    let review = reviews
        .submit(NewReview {
            product_id: ProductId::new("mie-ayam-original"),
            rating: 4,
            comment: "Porsinya pas.".to_owned(),
            photos: Vec::new(),
        })
        .unwrap();

    // The author votes once; a repeat does not count.
    assert!(reviews.vote_helpful(&review.id).unwrap());
    assert!(!reviews.vote_helpful(&review.id).unwrap());

    // A different signed-in user still can.
    AuthService::new(env.store()).logout().unwrap();
    env.sign_in_customer("Siti Rahayu", "siti@example.com");
    assert!(reviews.vote_helpful(&review.id).unwrap());

    let stored = reviews.reviews();
    assert_eq!(stored.first().unwrap().helpful_count(), 2);
}

#[test]
fn chat_round_trip_between_customer_and_admin() {
    let env = TestEnv::with_catalog();
    env.sign_in_customer("Budi Santoso", "budi@example.com");
    let chat = ChatService::new(env.store());

    // Customer writes; the canned acknowledgment arrives in the same write.
    let thread = chat.send("Halo, pesanan saya sudah dikirim?").unwrap();
    assert_eq!(thread.messages.len(), 3); // opener + message + ack

    // Admin sees the thread and replies; the reply is unread.
    let admin = AdminChatService::new(env.store());
    assert_eq!(admin.threads().len(), 1);
    let replied = admin
        .reply(&thread.id, "Sudah ya kak, ditunggu saja.")
        .unwrap();
    assert_eq!(replied.unread, 1);
    assert_eq!(replied.last_message().unwrap().role, ChatRole::Admin);

    // Customer opens the thread: reply visible, unread cleared.
    let opened = chat.open_thread().unwrap();
    assert_eq!(opened.unread, 0);
    assert_eq!(
        opened.last_message().unwrap().text,
        "Sudah ya kak, ditunggu saja."
    );
}
