//! Application state shared with the presentation layer.
//!
//! The stores are explicitly constructed here and injected into whatever
//! renders them; there are no ambient globals. State lives for the
//! duration of one application run; dropping it is shutdown.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::Checkout;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::profile::ProfileStore;
use crate::session::SessionState;
use crate::storage::DirStore;

/// Application state: configuration, catalog, and the two stores.
///
/// Mutation goes through the `_mut` accessors; the model is
/// single-threaded, so exclusive access is simply `&mut AppState`.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    cart: CartStore,
    profile: ProfileStore,
    session: SessionState,
    checkout: Checkout,
}

impl AppState {
    /// Construct the full application state from configuration.
    ///
    /// Loads the catalog (external file or built-in dataset), opens the
    /// data directory, and initializes both stores from persisted state.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog fails to load, the data directory
    /// cannot be created, or persisted state is unreadable or corrupt.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = Arc::new(match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        });
        tracing::info!(
            products = catalog.len(),
            data_dir = %config.data_dir.display(),
            "storefront state initialized"
        );

        let cart = CartStore::load(
            Arc::clone(&catalog),
            Box::new(DirStore::open(&config.data_dir)?),
        )?;
        let profile = ProfileStore::load(Box::new(DirStore::open(&config.data_dir)?))?;
        let checkout = Checkout::new(config.checkout_delay);

        Ok(Self {
            config,
            catalog,
            cart,
            profile,
            session: SessionState::new(),
            checkout,
        })
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The immutable product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart store, mutably.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The profile store.
    #[must_use]
    pub const fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    /// The profile store, mutably.
    pub const fn profile_mut(&mut self) -> &mut ProfileStore {
        &mut self.profile
    }

    /// Session-scoped state, mutably.
    pub const fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// The checkout flow together with the cart it operates on.
    ///
    /// Split borrow so the flow can clear the cart while both live in
    /// `self`.
    pub const fn checkout_parts(&mut self) -> (&mut Checkout, &mut CartStore) {
        (&mut self.checkout, &mut self.cart)
    }
}
