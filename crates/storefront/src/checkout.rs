//! The checkout flow and order summary pricing.
//!
//! Checkout is a trivial state machine: `Idle -> Processing -> Idle`. On
//! submit it suspends for a fixed simulated delay, generates an order
//! number, clears the cart, and hands the presentation layer a navigation
//! target. Nothing about the order is persisted, the delay never fails,
//! and it cannot be cancelled once started.

use std::time::Duration;

use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};
use rust_decimal::Decimal;

use mart_core::{CheckoutState, OrderNumber, Price};

use crate::cart::CartStore;
use crate::error::Result;
use crate::session::Route;

/// Number of random characters in an order number suffix.
const ORDER_SUFFIX_LEN: usize = 9;

/// Sales tax applied to the order subtotal.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2) // 8%
}

/// Shipping options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
    Overnight,
}

impl ShippingMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Overnight];

    /// Display name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping",
            Self::Express => "Express Shipping",
            Self::Overnight => "Overnight Shipping",
        }
    }

    /// Flat shipping cost.
    #[must_use]
    pub fn price(&self) -> Price {
        match self {
            Self::Standard => Price::ZERO,
            Self::Express => Price::from_cents(15_00),
            Self::Overnight => Price::from_cents(30_00),
        }
    }

    /// Delivery estimate shown next to the option.
    #[must_use]
    pub const fn delivery_estimate(&self) -> &'static str {
        match self {
            Self::Standard => "5-7 business days",
            Self::Express => "2-3 business days",
            Self::Overnight => "Next business day",
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Overnight => "overnight",
        };
        write!(f, "{key}")
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "overnight" => Ok(Self::Overnight),
            _ => Err(format!("invalid shipping method: {s}")),
        }
    }
}

/// Price breakdown shown before submitting an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Compute the breakdown for a cart subtotal and shipping choice.
    #[must_use]
    pub fn compute(subtotal: Price, method: ShippingMethod) -> Self {
        let shipping = method.price();
        let tax = subtotal * tax_rate();
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// A completed order: the generated number and where to go next.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    /// Navigation target after the confirmation is shown.
    pub next: Route,
}

/// The checkout flow.
pub struct Checkout {
    state: CheckoutState,
    delay: Duration,
}

impl Checkout {
    /// Create an idle flow with the configured simulated delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            state: CheckoutState::Idle,
            delay,
        }
    }

    /// The current flow state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Submit the order: wait the simulated processing delay, clear the
    /// cart, and return the confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error only when clearing the cart fails to persist; the
    /// simulated processing itself never fails.
    pub async fn place_order(&mut self, cart: &mut CartStore) -> Result<OrderConfirmation> {
        self.state = CheckoutState::Processing;
        tracing::info!(delay_ms = self.delay.as_millis(), "processing order");

        tokio::time::sleep(self.delay).await;

        let order_number = generate_order_number();
        let cleared = cart.clear();
        self.state = CheckoutState::Idle;
        cleared?;

        tracing::info!(%order_number, "order placed");
        Ok(OrderConfirmation {
            order_number,
            next: Route::Home,
        })
    }
}

/// Generate an order number: `ORD-<unix millis>-<random suffix>`.
fn generate_order_number() -> OrderNumber {
    let millis = Utc::now().timestamp_millis();
    let suffix = Alphanumeric
        .sample_string(&mut rand::rng(), ORDER_SUFFIX_LEN)
        .to_uppercase();
    OrderNumber::new(format!("ORD-{millis}-{suffix}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Product};
    use crate::storage::MemoryStore;
    use mart_core::{CategoryId, ProductId};
    use std::sync::Arc;

    fn cart_with_item() -> CartStore {
        let catalog = Arc::new(
            Catalog::new(
                vec![Product {
                    id: ProductId::new("p1"),
                    name: "Widget".to_owned(),
                    description: String::new(),
                    category: CategoryId::new("home"),
                    price: Price::from_cents(10_00),
                    original_price: Price::from_cents(10_00),
                    on_sale: false,
                    stock: 3,
                    rating: 4.0,
                    image: String::new(),
                    shipping: String::new(),
                    specs: String::new(),
                }],
                vec![Category {
                    id: CategoryId::new("home"),
                    name: "Home".to_owned(),
                    icon: String::new(),
                }],
            )
            .unwrap(),
        );
        let mut cart = CartStore::load(catalog, Box::new(MemoryStore::new())).unwrap();
        cart.add(&ProductId::new("p1")).unwrap();
        cart
    }

    #[test]
    fn test_order_summary_standard_shipping() {
        let summary = OrderSummary::compute(Price::from_cents(100_00), ShippingMethod::Standard);
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.tax, Price::from_cents(8_00));
        assert_eq!(summary.total, Price::from_cents(108_00));
    }

    #[test]
    fn test_order_summary_overnight_shipping() {
        let summary = OrderSummary::compute(Price::from_cents(50_00), ShippingMethod::Overnight);
        assert_eq!(summary.shipping, Price::from_cents(30_00));
        assert_eq!(summary.tax, Price::from_cents(4_00));
        assert_eq!(summary.total, Price::from_cents(84_00));
    }

    #[test]
    fn test_shipping_method_parse_roundtrip() {
        for method in ShippingMethod::ALL {
            let parsed: ShippingMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("same-day".parse::<ShippingMethod>().is_err());
    }

    #[test]
    fn test_order_number_shape() {
        let number = generate_order_number();
        let raw = number.as_str();
        let mut parts = raw.splitn(3, '-');
        assert_eq!(parts.next(), Some("ORD"));
        let millis = parts.next().unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), ORDER_SUFFIX_LEN);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_clears_cart_and_returns_home() {
        let mut cart = cart_with_item();
        let mut checkout = Checkout::new(Duration::from_millis(2000));
        assert_eq!(checkout.state(), CheckoutState::Idle);
        assert_eq!(cart.item_count(), 1);

        let confirmation = checkout.place_order(&mut cart).await.unwrap();

        assert_eq!(checkout.state(), CheckoutState::Idle);
        assert!(cart.is_empty());
        assert_eq!(confirmation.next, Route::Home);
        assert!(confirmation.order_number.as_str().starts_with("ORD-"));
    }
}
