//! Unified error handling for the storefront library.
//!
//! Domain-level misuse of the stores (unknown ids, boundary quantities) is
//! never an error; those operations are defined as no-ops. Errors here are
//! environmental: unreadable or corrupt persisted state, a bad catalog
//! file, or invalid configuration.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog loading or validation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The key-value backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Persisted state exists but does not decode.
    #[error("corrupt persisted state: {0}")]
    CorruptState(#[from] serde_json::Error),
}

/// Result type alias for [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_state_display() {
        let json_err = serde_json::from_str::<Vec<u32>>("{oops").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(err.to_string().starts_with("corrupt persisted state:"));
    }
}
