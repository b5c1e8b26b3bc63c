//! Checkout flow: the Idle -> Processing -> Idle machine, the order
//! summary, and the session entry gate.

#![allow(clippy::unwrap_used)]

use mart_core::{CheckoutState, ProductId};
use mart_integration_tests::TestContext;
use mart_storefront::checkout::{OrderSummary, ShippingMethod};
use mart_storefront::session::Route;

fn p(id: &str) -> ProductId {
    ProductId::new(id)
}

#[tokio::test]
async fn test_place_order_clears_cart_and_navigates_home() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();
    state.cart_mut().add(&p("p2")).unwrap();
    assert_eq!(state.cart().item_count(), 2);

    let (checkout, cart) = state.checkout_parts();
    assert_eq!(checkout.state(), CheckoutState::Idle);

    let confirmation = checkout.place_order(cart).await.unwrap();

    assert_eq!(checkout.state(), CheckoutState::Idle);
    assert!(state.cart().is_empty());
    assert_eq!(confirmation.next, Route::Home);
    assert_eq!(ctx.persisted("cart").as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_order_number_shape_and_uniqueness() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();
    let (checkout, cart) = state.checkout_parts();
    let first = checkout.place_order(cart).await.unwrap().order_number;

    state.cart_mut().add(&p("p2")).unwrap();
    let (checkout, cart) = state.checkout_parts();
    let second = checkout.place_order(cart).await.unwrap().order_number;

    for number in [&first, &second] {
        let raw = number.as_str();
        let mut parts = raw.splitn(3, '-');
        assert_eq!(parts.next(), Some("ORD"));
        assert!(parts.next().unwrap().chars().all(|c| c.is_ascii_digit()));
        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_checkout_on_persisted_cart_from_previous_run() {
    let ctx = TestContext::new();
    {
        let mut state = ctx.state();
        state.cart_mut().add(&p("p8")).unwrap();
    }

    let mut state = ctx.state();
    assert_eq!(state.cart().item_count(), 1);
    let (checkout, cart) = state.checkout_parts();
    checkout.place_order(cart).await.unwrap();

    // The cleared cart is what the next run sees.
    let state = ctx.state();
    assert!(state.cart().is_empty());
}

#[test]
fn test_order_summary_matches_cart_subtotal() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    // p8 costs $89.99 on sale.
    state.cart_mut().add(&p("p8")).unwrap();
    let subtotal = state.cart().subtotal();
    assert_eq!(subtotal.to_string(), "$89.99");

    let summary = OrderSummary::compute(subtotal, ShippingMethod::Express);
    assert_eq!(summary.shipping.to_string(), "$15.00");
    assert_eq!(summary.total, subtotal + summary.shipping + summary.tax);
}

#[test]
fn test_standard_shipping_is_free() {
    let summary = OrderSummary::compute(
        mart_core::Price::from_cents(100_00),
        ShippingMethod::Standard,
    );
    assert!(summary.shipping.is_zero());
    assert_eq!(summary.total.to_string(), "$108.00");
}

#[test]
fn test_session_gate_shows_landing_once_per_session() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    assert_eq!(state.session_mut().entry_route(), Route::Landing);
    assert_eq!(state.session_mut().entry_route(), Route::Home);

    // The marker is session-scoped: a new run starts at the landing again.
    let mut next_run = ctx.state();
    assert_eq!(next_run.session_mut().entry_route(), Route::Landing);
}
