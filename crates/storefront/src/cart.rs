//! The shopping cart store.
//!
//! The cart owns an ordered list of `(product id, quantity)` entries keyed
//! by product id. Every mutation clamps against the product's stock
//! ceiling, then mirrors the full entry list into the key-value store
//! before returning. Domain misuse (unknown ids, quantities already at a
//! boundary) is a silent no-op, never an error; only the persistence
//! backend can fail.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mart_core::{Price, ProductId};

use crate::catalog::{Catalog, Product};
use crate::error::Result;
use crate::storage::{KeyValueStore, keys};

/// One `(product id, quantity)` pair in the cart.
///
/// Existence implies `quantity >= 1`; a quantity reaching zero removes the
/// entry instead. Serializes as `{"id": ..., "quantity": ...}`, the shape
/// persisted under the `cart` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// The product this entry refers to.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Units of the product in the cart, always positive.
    pub quantity: u32,
}

/// A cart entry joined with its catalog product.
#[derive(Debug, Clone)]
pub struct CartItem<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartItem<'_> {
    /// Line subtotal at the current sale price.
    #[must_use]
    pub fn line_subtotal(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The cart store.
///
/// Owns its in-memory entry list for the lifetime of the application
/// session; the key-value store is a mirror, never a second writer.
pub struct CartStore {
    catalog: Arc<Catalog>,
    entries: Vec<CartEntry>,
    storage: Box<dyn KeyValueStore>,
}

impl CartStore {
    /// Initialize the cart from persisted storage.
    ///
    /// An absent `cart` key yields an empty cart. A present but malformed
    /// value is a startup-time error, not something to silently discard.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read or the persisted
    /// value does not decode as an entry list.
    pub fn load(catalog: Arc<Catalog>, storage: Box<dyn KeyValueStore>) -> Result<Self> {
        let entries = match storage.get(keys::CART)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(Self {
            catalog,
            entries,
            storage,
        })
    }

    /// Add one unit of a product.
    ///
    /// Creates a quantity-1 entry on first add (stock permitting), bumps an
    /// existing entry unless it already sits at the stock ceiling, and
    /// ignores ids the catalog does not know.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated cart fails.
    pub fn add(&mut self, product_id: &ProductId) -> Result<()> {
        let Some(stock) = self.product_stock(product_id) else {
            return Ok(());
        };

        if let Some(entry) = self.entry_mut(product_id) {
            // Respect the stock ceiling.
            if entry.quantity >= stock {
                return Ok(());
            }
            entry.quantity += 1;
        } else {
            if stock == 0 {
                return Ok(());
            }
            self.entries.push(CartEntry {
                product_id: product_id.clone(),
                quantity: 1,
            });
        }

        tracing::debug!(%product_id, "added to cart");
        self.persist()
    }

    /// Remove a product's entry entirely; no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated cart fails.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.product_id != product_id);
        if self.entries.len() == before {
            return Ok(());
        }
        tracing::debug!(%product_id, "removed from cart");
        self.persist()
    }

    /// Set a product's quantity.
    ///
    /// A quantity of zero or less removes the entry. Positive quantities
    /// are clamped to the product's stock. Unknown product ids, and
    /// products without an existing entry, are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated cart fails.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<()> {
        let Some(stock) = self.product_stock(product_id) else {
            return Ok(());
        };

        if quantity <= 0 {
            return self.remove(product_id);
        }

        let clamped = u32::try_from(quantity.min(i64::from(stock))).unwrap_or(0);
        let Some(entry) = self.entry_mut(product_id) else {
            return Ok(());
        };
        if entry.quantity == clamped {
            return Ok(());
        }
        entry.quantity = clamped;

        tracing::debug!(%product_id, quantity = clamped, "cart quantity set");
        self.persist()
    }

    /// Bump a product's quantity by one, up to its stock ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated cart fails.
    pub fn increment(&mut self, product_id: &ProductId) -> Result<()> {
        let Some(stock) = self.product_stock(product_id) else {
            return Ok(());
        };
        let Some(current) = self.entry(product_id).map(|entry| entry.quantity) else {
            return Ok(());
        };

        if current < stock {
            self.set_quantity(product_id, i64::from(current) + 1)?;
        }
        Ok(())
    }

    /// Drop a product's quantity by one; at quantity one the entry is
    /// removed entirely.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated cart fails.
    pub fn decrement(&mut self, product_id: &ProductId) -> Result<()> {
        let Some(current) = self.entry(product_id).map(|entry| entry.quantity) else {
            return Ok(());
        };
        self.set_quantity(product_id, i64::from(current) - 1)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated cart fails.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        tracing::debug!("cart cleared");
        self.persist()
    }

    /// The raw entry list, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Entries joined with product data.
    ///
    /// Entries whose product no longer exists in the catalog are silently
    /// dropped from the result (they remain in the entry list and can still
    /// be removed).
    #[must_use]
    pub fn items(&self) -> Vec<CartItem<'_>> {
        self.entries
            .iter()
            .filter_map(|entry| {
                self.catalog.product(&entry.product_id).map(|product| CartItem {
                    product,
                    quantity: entry.quantity,
                })
            })
            .collect()
    }

    /// Cart subtotal at current sale prices.
    ///
    /// Note the asymmetry with [`CartStore::total`]: this sums each item's
    /// `price` (the discounted price for on-sale products). The two
    /// operations deliberately keep their distinct price bases.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items()
            .iter()
            .map(|item| item.product.price * item.quantity)
            .sum()
    }

    /// Cart total at undiscounted prices.
    ///
    /// On-sale items are priced at their pre-discount `original_price`
    /// here, while [`CartStore::subtotal`] uses the sale price. Callers
    /// relying on either operation get exactly the price basis its name has
    /// always implied; the asymmetry is intentional and preserved.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items()
            .iter()
            .map(|item| item.product.undiscounted_price() * item.quantity)
            .sum()
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Whether the cart holds an entry for `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entry(product_id).is_some()
    }

    /// Quantity of `product_id` in the cart, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.entry(product_id).map_or(0, |entry| entry.quantity)
    }

    /// True when the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn product_stock(&self, product_id: &ProductId) -> Option<u32> {
        self.catalog.product(product_id).map(|product| product.stock)
    }

    fn entry(&self, product_id: &ProductId) -> Option<&CartEntry> {
        self.entries
            .iter()
            .find(|entry| &entry.product_id == product_id)
    }

    fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| &entry.product_id == product_id)
    }

    /// Mirror the full entry list into storage.
    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set(keys::CART, &raw)?;
        Ok(())
    }
}
