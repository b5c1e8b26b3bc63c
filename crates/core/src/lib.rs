//! Mart Core - Shared types library.
//!
//! This crate provides common types used across all Mart components:
//! - `storefront` - Catalog, cart, profile, and checkout stores
//! - `cli` - Command-line presentation layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
