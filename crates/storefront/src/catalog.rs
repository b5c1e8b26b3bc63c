//! Product catalog reference data.
//!
//! The catalog is a static, read-only, ordered list of products plus a list
//! of category tags, deserialized once at startup. It is supplied externally
//! (the built-in demo dataset embedded in the binary, or a JSON file named
//! in configuration) and nothing in the application mutates it.
//!
//! Querying (search, category and sale filters, sorting) is a pure function
//! of the loaded data. Results are recomputed per call; there is no cache to
//! invalidate.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mart_core::{CategoryId, Price, ProductId, SortKey, StockLevel};

/// Built-in demo dataset, embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog JSON is malformed.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two products share an id.
    #[error("duplicate product id `{id}` in catalog")]
    DuplicateProduct {
        /// The repeated id.
        id: ProductId,
    },
    /// An on-sale product is not actually discounted.
    #[error("on-sale product `{id}` must be priced below its original price")]
    InvalidSalePrice {
        /// The offending product id.
        id: ProductId,
    },
}

/// A single product record.
///
/// Field names mirror the persisted JSON shape (`originalPrice`, `onSale`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Category tag, matching one of the catalog's [`Category`] entries.
    pub category: CategoryId,
    /// Current sale price.
    pub price: Price,
    /// Pre-discount price; equals `price` for products not on sale.
    pub original_price: Price,
    pub on_sale: bool,
    /// Units available; the cart never holds more than this.
    pub stock: u32,
    /// Average rating, 0-5.
    pub rating: f32,
    /// Image reference (path or URL, presentation-defined).
    pub image: String,
    /// Shipping note shown on the product card.
    pub shipping: String,
    /// Short specs line.
    pub specs: String,
}

impl Product {
    /// The price used when totalling without the sale discount applied:
    /// the original price for on-sale products, the list price otherwise.
    #[must_use]
    pub const fn undiscounted_price(&self) -> Price {
        if self.on_sale {
            self.original_price
        } else {
            self.price
        }
    }

    /// Rounded percentage discount for an on-sale product.
    ///
    /// Returns `None` for products not on sale.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.on_sale {
            return None;
        }
        let original = self.original_price.amount();
        if original.is_zero() {
            return None;
        }
        let ratio = (original - self.price.amount()) / original * Decimal::from(100);
        ratio.round().to_u32()
    }

    /// Stock availability classification.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }
}

/// A category tag with its display name and icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

/// On-disk catalog shape.
#[derive(Debug, Deserialize)]
struct CatalogData {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The immutable product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from already-deserialized records.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate product ids, or when an on-sale
    /// product's original price does not exceed its sale price.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.on_sale && product.original_price <= product.price {
                return Err(CatalogError::InvalidSalePrice {
                    id: product.id.clone(),
                });
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct {
                    id: product.id.clone(),
                });
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
            index,
        })
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or the records violate a
    /// catalog invariant (see [`Catalog::new`]).
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(raw)?;
        Self::new(data.products, data.categories)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or fails to parse.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// The built-in demo dataset.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded dataset is invalid, which a
    /// passing test suite rules out.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All products in their original ("featured") order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All category tags.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Filter and sort products according to `query`.
    #[must_use]
    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| query.matches(product))
            .collect();

        match query.sort {
            // Featured keeps the catalog's original order.
            SortKey::Featured => {}
            SortKey::PriceLow => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHigh => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Rating => matched.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }

        matched
    }
}

/// Filter and sort criteria for catalog listings.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive search over name, description, and specs.
    pub search: Option<String>,
    /// Restrict to a single category.
    pub category: Option<CategoryId>,
    /// Restrict to on-sale products.
    pub on_sale_only: bool,
    /// Result ordering.
    pub sort: SortKey,
}

impl ProductQuery {
    /// A query matching only on-sale products, as the offers listing uses.
    #[must_use]
    pub fn on_sale() -> Self {
        Self {
            on_sale_only: true,
            ..Self::default()
        }
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
                || product.specs.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if self.on_sale_only && !product.on_sale {
            return false;
        }

        true
    }
}
