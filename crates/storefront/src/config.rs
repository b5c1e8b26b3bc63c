//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults make the demo runnable with no
//! environment at all.
//!
//! - `MART_DATA_DIR` - Directory for persisted state (default: `.mart-data`)
//! - `MART_CATALOG_PATH` - JSON catalog file (default: built-in dataset)
//! - `MART_CHECKOUT_DELAY_MS` - Simulated checkout delay (default: 2000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default directory for persisted cart and profile state.
const DEFAULT_DATA_DIR: &str = ".mart-data";

/// Default simulated checkout processing delay, in milliseconds.
const DEFAULT_CHECKOUT_DELAY_MS: &str = "2000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted key-value entries.
    pub data_dir: PathBuf,
    /// External catalog file; `None` uses the built-in dataset.
    pub catalog_path: Option<PathBuf>,
    /// Simulated checkout processing delay.
    pub checkout_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
            checkout_delay: Duration::from_millis(2000),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("MART_DATA_DIR", DEFAULT_DATA_DIR));
        let catalog_path = get_optional_env("MART_CATALOG_PATH").map(PathBuf::from);
        let delay_ms = get_env_or_default("MART_CHECKOUT_DELAY_MS", DEFAULT_CHECKOUT_DELAY_MS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MART_CHECKOUT_DELAY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            data_dir,
            catalog_path,
            checkout_delay: Duration::from_millis(delay_ms),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".mart-data"));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.checkout_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("MART_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_invalid_delay_error_names_variable() {
        let err = ConfigError::InvalidEnvVar(
            "MART_CHECKOUT_DELAY_MS".to_string(),
            "invalid digit".to_string(),
        );
        assert!(err.to_string().contains("MART_CHECKOUT_DELAY_MS"));
    }
}
