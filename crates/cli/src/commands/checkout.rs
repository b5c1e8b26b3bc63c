//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! mart checkout
//! mart checkout --shipping overnight
//! ```

use clap::Args;

use mart_storefront::checkout::{OrderSummary, ShippingMethod};
use mart_storefront::error::Result;
use mart_storefront::state::AppState;

/// Arguments for `mart checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Shipping method: standard, express, overnight
    #[arg(long, default_value_t = ShippingMethod::Standard)]
    pub shipping: ShippingMethod,
}

/// Place the order in the cart.
///
/// # Errors
///
/// Returns an error when persisting the cleared cart fails.
pub async fn run(state: &mut AppState, args: &CheckoutArgs) -> Result<()> {
    if state.cart().is_empty() {
        println!("🛒 Your cart is empty");
        println!("Add some products to get started!");
        return Ok(());
    }

    let summary = OrderSummary::compute(state.cart().subtotal(), args.shipping);
    println!("Order Summary");
    println!(
        "  Shipping: {} ({})",
        args.shipping.label(),
        args.shipping.delivery_estimate()
    );
    println!(
        "  Subtotal ({} items): {}",
        state.cart().item_count(),
        summary.subtotal
    );
    if summary.shipping.is_zero() {
        println!("  Shipping: FREE");
    } else {
        println!("  Shipping: {}", summary.shipping);
    }
    println!("  Tax (8%): {}", summary.tax);
    println!("  Total: {}", summary.total);
    println!();
    println!("Processing...");

    let (checkout, cart) = state.checkout_parts();
    let confirmation = checkout.place_order(cart).await?;

    println!("Order {} placed successfully!", confirmation.order_number);
    println!("Continue shopping at {}", confirmation.next);
    Ok(())
}
