//! Cart lifecycle tests against real directory-backed storage.
//!
//! These exercise the full path the application takes: catalog lookup,
//! stock clamping, and the persisted mirror under the `cart` key.

#![allow(clippy::unwrap_used)]

use mart_core::ProductId;
use mart_integration_tests::TestContext;

fn p(id: &str) -> ProductId {
    ProductId::new(id)
}

#[test]
fn test_quantity_is_capped_at_stock_for_any_add_sequence() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    // p3 in the built-in catalog has 8 units in stock.
    let stock = state.catalog().product(&p("p3")).unwrap().stock;
    assert_eq!(stock, 8);

    for _ in 0..20 {
        state.cart_mut().add(&p("p3")).unwrap();
    }
    for _ in 0..20 {
        state.cart_mut().increment(&p("p3")).unwrap();
    }

    assert_eq!(state.cart().quantity_of(&p("p3")), stock);
}

#[test]
fn test_out_of_stock_product_never_enters_cart() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    // p4 in the built-in catalog is out of stock.
    assert_eq!(state.catalog().product(&p("p4")).unwrap().stock, 0);

    state.cart_mut().add(&p("p4")).unwrap();
    assert!(!state.cart().contains(&p("p4")));
    assert!(state.cart().is_empty());
}

#[test]
fn test_decrement_at_one_removes_entry() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();
    assert!(state.cart().contains(&p("p1")));

    state.cart_mut().decrement(&p("p1")).unwrap();
    assert!(!state.cart().contains(&p("p1")));
    assert_eq!(state.cart().item_count(), 0);
}

#[test]
fn test_set_quantity_zero_removes_whatever_the_prior_quantity() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();
    state.cart_mut().set_quantity(&p("p1"), 7).unwrap();
    assert_eq!(state.cart().quantity_of(&p("p1")), 7);

    state.cart_mut().set_quantity(&p("p1"), 0).unwrap();
    assert!(!state.cart().contains(&p("p1")));
}

#[test]
fn test_item_count_matches_sum_of_quantities() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();
    state.cart_mut().add(&p("p2")).unwrap();
    state.cart_mut().set_quantity(&p("p2"), 4).unwrap();

    let expected: u32 = state.cart().entries().iter().map(|e| e.quantity).sum();
    assert_eq!(state.cart().item_count(), expected);
    assert_eq!(expected, 5);
}

#[test]
fn test_cart_survives_a_new_application_run() {
    let ctx = TestContext::new();
    {
        let mut state = ctx.state();
        state.cart_mut().add(&p("p1")).unwrap();
        state.cart_mut().add(&p("p1")).unwrap();
        state.cart_mut().add(&p("p8")).unwrap();
    }

    // A fresh state over the same data directory sees the same cart.
    let state = ctx.state();
    assert_eq!(state.cart().quantity_of(&p("p1")), 2);
    assert_eq!(state.cart().quantity_of(&p("p8")), 1);
    assert_eq!(state.cart().item_count(), 3);
}

#[test]
fn test_clear_persists_an_empty_array() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();
    state.cart_mut().clear().unwrap();

    assert!(state.cart().items().is_empty());
    assert_eq!(ctx.persisted("cart").as_deref(), Some("[]"));
}

#[test]
fn test_persisted_entry_shape() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.cart_mut().add(&p("p1")).unwrap();

    let raw = ctx.persisted("cart").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!([{"id": "p1", "quantity": 1}]));
}

#[test]
fn test_subtotal_uses_sale_price_and_total_uses_original() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    // p1 is on sale: $199.99, originally $249.99.
    state.cart_mut().add(&p("p1")).unwrap();
    state.cart_mut().add(&p("p1")).unwrap();

    assert_eq!(state.cart().subtotal().to_string(), "$399.98");
    assert_eq!(state.cart().total().to_string(), "$499.98");
}
