//! Mart CLI - Command-line frontend for the storefront demo.
//!
//! # Usage
//!
//! ```bash
//! # Enter the store (landing screen on the first visit of a session)
//! mart open
//!
//! # Browse the catalog
//! mart products --search headphones --sort price-low
//! mart offers
//!
//! # Work with the cart
//! mart cart add p1
//! mart cart show
//!
//! # Edit the profile and check out
//! mart profile edit --name "Ada Lovelace" --email ada@example.com
//! mart checkout --shipping express
//! ```
//!
//! # Commands
//!
//! - `open` - Entry screen for the session
//! - `products` / `offers` - Catalog browsing
//! - `cart` - Cart inspection and mutation
//! - `profile` - Profile view/edit/reset
//! - `checkout` - Place the order in the cart

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use mart_storefront::config::StorefrontConfig;
use mart_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "mart")]
#[command(author, version, about = "Mart storefront demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter the store
    Open,
    /// Browse and search the product catalog
    Products(commands::browse::ProductsArgs),
    /// List products currently on sale
    Offers(commands::browse::OffersArgs),
    /// Inspect and edit the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// View and edit the user profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Place the order in the cart
    Checkout(commands::checkout::CheckoutArgs),
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::new(config)?;

    match cli.command {
        Commands::Open => commands::browse::open(&mut state),
        Commands::Products(args) => commands::browse::products(&state, &args),
        Commands::Offers(args) => commands::browse::offers(&state, &args),
        Commands::Cart { action } => commands::cart::run(&mut state, action)?,
        Commands::Profile { action } => commands::profile::run(&mut state, action)?,
        Commands::Checkout(args) => commands::checkout::run(&mut state, &args).await?,
    }

    Ok(())
}
