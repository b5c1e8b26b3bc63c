//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Checkout flow state.
///
/// The flow is `Idle -> Processing -> Idle`; the processing phase is a
/// fixed simulated delay and cannot be cancelled once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    #[default]
    Idle,
    Processing,
}

/// Stock availability classification for a product.
///
/// `Low` covers positive stock below ten units, the threshold at which the
/// storefront shows an "only N left" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    /// Stock count below which availability is considered [`StockLevel::Low`].
    pub const LOW_STOCK_THRESHOLD: u32 = 10;

    /// Classify a raw stock count.
    #[must_use]
    pub const fn from_stock(stock: u32) -> Self {
        match stock {
            0 => Self::OutOfStock,
            s if s < Self::LOW_STOCK_THRESHOLD => Self::Low,
            _ => Self::InStock,
        }
    }
}

/// Sort order for catalog listings.
///
/// `Featured` preserves the catalog's original ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    /// Price, lowest first.
    PriceLow,
    /// Price, highest first.
    PriceHigh,
    /// Name, lexicographic.
    Name,
    /// Rating, highest first.
    Rating,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Featured => write!(f, "featured"),
            Self::PriceLow => write!(f, "price-low"),
            Self::PriceHigh => write!(f, "price-high"),
            Self::Name => write!(f, "name"),
            Self::Rating => write!(f, "rating"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_level_boundaries() {
        assert_eq!(StockLevel::from_stock(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::from_stock(1), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(9), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(10), StockLevel::InStock);
    }

    #[test]
    fn test_sort_key_roundtrip() {
        for key in [
            SortKey::Featured,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Name,
            SortKey::Rating,
        ] {
            let parsed: SortKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn test_sort_key_rejects_unknown() {
        assert!("price".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_checkout_state_default_is_idle() {
        assert_eq!(CheckoutState::default(), CheckoutState::Idle);
    }
}
