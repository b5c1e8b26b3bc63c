//! Integration tests for Mart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart lifecycle against real directory-backed storage
//! - `profile_flow` - Profile edits through form validation
//! - `checkout_flow` - Checkout state machine, order summary, session gate
//!
//! Every test builds its own [`TestContext`] with a uuid-named data
//! directory under the system temp dir, so tests never share state and can
//! run in parallel.

use std::path::Path;
use std::time::Duration;

use mart_storefront::config::StorefrontConfig;
use mart_storefront::state::AppState;

/// An isolated application state rooted in a throwaway data directory.
///
/// The directory is removed on drop.
pub struct TestContext {
    config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with a fresh uuid-named data directory and a short
    /// checkout delay.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = std::env::temp_dir().join(format!("mart-it-{}", uuid::Uuid::new_v4()));
        Self {
            config: StorefrontConfig {
                data_dir,
                catalog_path: None,
                checkout_delay: Duration::from_millis(10),
            },
        }
    }

    /// The context's configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The context's data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Build an [`AppState`] over this context's data directory.
    ///
    /// Call repeatedly to simulate separate application runs sharing
    /// persisted state.
    ///
    /// # Panics
    ///
    /// Panics when state construction fails; tests treat that as a failure.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn state(&self) -> AppState {
        AppState::new(self.config.clone()).unwrap()
    }

    /// Raw persisted value for a storage key, if any.
    #[must_use]
    pub fn persisted(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.config.data_dir.join(format!("{key}.json"))).ok()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.config.data_dir);
    }
}
