//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! mart cart add p1
//! mart cart set p1 3
//! mart cart show
//! mart cart clear
//! ```

use clap::Subcommand;

use mart_core::ProductId;
use mart_storefront::error::Result;
use mart_storefront::state::AppState;

/// Cart actions.
#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product entirely
    Remove {
        /// Product id
        id: String,
    },
    /// Set a product's quantity (0 removes it)
    Set {
        /// Product id
        id: String,
        /// New quantity
        quantity: i64,
    },
    /// Increase a product's quantity by one
    Inc {
        /// Product id
        id: String,
    },
    /// Decrease a product's quantity by one
    Dec {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

/// Dispatch a cart action.
///
/// # Errors
///
/// Returns an error when persisting a cart mutation fails.
pub fn run(state: &mut AppState, action: CartAction) -> Result<()> {
    match action {
        CartAction::Show => show(state),
        CartAction::Add { id } => add(state, &ProductId::new(id))?,
        CartAction::Remove { id } => {
            let id = ProductId::new(id);
            state.cart_mut().remove(&id)?;
            println!("Item removed from cart");
        }
        CartAction::Set { id, quantity } => {
            let id = ProductId::new(id);
            state.cart_mut().set_quantity(&id, quantity)?;
            println!("Quantity updated");
        }
        CartAction::Inc { id } => increment(state, &ProductId::new(id))?,
        CartAction::Dec { id } => {
            let id = ProductId::new(id);
            let removing = state.cart().quantity_of(&id) == 1;
            state.cart_mut().decrement(&id)?;
            if removing {
                println!("Item removed from cart");
            } else {
                println!("Quantity updated");
            }
        }
        CartAction::Clear => {
            state.cart_mut().clear()?;
            println!("Cart cleared");
        }
    }
    Ok(())
}

fn add(state: &mut AppState, id: &ProductId) -> Result<()> {
    let Some((name, stock)) = state
        .catalog()
        .product(id)
        .map(|product| (product.name.clone(), product.stock))
    else {
        println!("No such product: {id}");
        return Ok(());
    };
    if stock == 0 {
        println!("{name} is out of stock");
        return Ok(());
    }
    if state.cart().quantity_of(id) >= stock {
        println!("Only {stock} items available in stock");
        return Ok(());
    }

    state.cart_mut().add(id)?;
    println!("{name} added to cart!");
    Ok(())
}

fn increment(state: &mut AppState, id: &ProductId) -> Result<()> {
    let Some(stock) = state.catalog().product(id).map(|product| product.stock) else {
        println!("No such product: {id}");
        return Ok(());
    };
    if state.cart().quantity_of(id) >= stock {
        println!("Only {stock} items available in stock");
        return Ok(());
    }

    state.cart_mut().increment(id)?;
    println!("Quantity updated");
    Ok(())
}

fn show(state: &AppState) {
    let cart = state.cart();
    let items = cart.items();

    if items.is_empty() {
        println!("🛒 Your cart is empty");
        println!("Add some products to get started!");
        return;
    }

    println!("Shopping Cart");
    for item in &items {
        println!(
            "  {:<4} {:<40} {} × {:>3} = {:>9}",
            item.product.id.as_str(),
            item.product.name,
            item.product.price,
            item.quantity,
            item.line_subtotal().to_string()
        );
    }

    let subtotal = cart.subtotal();
    let savings = cart.total() - subtotal;
    println!();
    println!("Subtotal ({} items): {subtotal}", cart.item_count());
    if !savings.is_zero() {
        println!("Sale savings: {savings}");
    }
    println!("Run `mart checkout` to place your order.");
}
