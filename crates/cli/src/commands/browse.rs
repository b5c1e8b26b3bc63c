//! Catalog browsing commands: entry screen, product listing, offers.
//!
//! # Usage
//!
//! ```bash
//! mart products --search "coffee" --category home --sort price-low
//! mart products --on-sale
//! mart offers --category fashion
//! ```

use clap::Args;

use mart_core::{SortKey, StockLevel};
use mart_storefront::catalog::{Product, ProductQuery};
use mart_storefront::session::Route;
use mart_storefront::state::AppState;

/// Arguments for `mart products`.
#[derive(Debug, Args)]
pub struct ProductsArgs {
    /// Search query matched against name, description, and specs
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to a category (see `mart offers` for the list)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only show products on sale
    #[arg(long)]
    pub on_sale: bool,

    /// Sort order: featured, price-low, price-high, name, rating
    #[arg(long, default_value_t = SortKey::Featured)]
    pub sort: SortKey,
}

/// Arguments for `mart offers`.
#[derive(Debug, Args)]
pub struct OffersArgs {
    /// Search query matched against name, description, and specs
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to a category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Enter the store: landing screen first, main view on repeat visits.
pub fn open(state: &mut AppState) {
    match state.session_mut().entry_route() {
        Route::Landing => {
            println!("🛍️  Welcome to Mart – For You");
            println!("Your one-stop shop for everything you need.");
            println!();
            println!("Run `mart products` to start browsing.");
        }
        route => {
            println!("Welcome back! Continuing at {route}.");
        }
    }
}

/// List products matching the given filters.
pub fn products(state: &AppState, args: &ProductsArgs) {
    let query = ProductQuery {
        search: args.search.clone(),
        category: args.category.clone().map(Into::into),
        on_sale_only: args.on_sale,
        sort: args.sort,
    };

    let matched = state.catalog().query(&query);
    for product in &matched {
        print_product_line(state, product);
    }
    println!();
    println!(
        "Showing {} of {} products",
        matched.len(),
        state.catalog().len()
    );
}

/// List on-sale products, with a per-category summary.
pub fn offers(state: &AppState, args: &OffersArgs) {
    let query = ProductQuery {
        search: args.search.clone(),
        category: args.category.clone().map(Into::into),
        ..ProductQuery::on_sale()
    };

    let matched = state.catalog().query(&query);
    for product in &matched {
        print_product_line(state, product);
    }

    println!();
    println!("({} items on sale)", matched.len());
    for category in state.catalog().categories() {
        let count = matched
            .iter()
            .filter(|p| p.category == category.id)
            .count();
        if count > 0 {
            println!("  {} {}: {count}", category.icon, category.name);
        }
    }
}

fn print_product_line(state: &AppState, product: &Product) {
    let mut line = format!(
        "{:<4} {:<40} {:>8}",
        product.id.as_str(),
        product.name,
        product.price.to_string()
    );

    if let Some(discount) = product.discount_percent() {
        line.push_str(&format!("  (was {}, {discount}% OFF)", product.original_price));
    }

    line.push_str(&format!("  ★ {:.1}", product.rating));

    match product.stock_level() {
        StockLevel::OutOfStock => line.push_str("  [Out of Stock]"),
        StockLevel::Low => line.push_str(&format!("  [Only {} left]", product.stock)),
        StockLevel::InStock => {}
    }

    let quantity = state.cart().quantity_of(&product.id);
    if quantity > 0 {
        line.push_str(&format!("  [{quantity} in cart]"));
    }

    println!("{line}");
}
