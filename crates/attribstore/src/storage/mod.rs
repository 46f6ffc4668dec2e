//! Store backend implementations.
//!
//! This module provides concrete implementations of the `PersistenceAdapter`
//! trait defined in `attribstore_core::persistence`. Backends are selected
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): thread-safe in-memory backend for testing
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with both backends (default):
//! ```bash
//! cargo build -p attribstore
//! ```
//!
//! Build with the in-memory backend only:
//! ```bash
//! cargo build -p attribstore --no-default-features --features inmemory
//! ```

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No store backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p attribstore --features dynamodb"
);

#[cfg(feature = "inmemory")]
pub mod memory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use memory::MemoryPersistenceAdapter;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbAdapterConfig, DynamoDbPersistenceAdapter};
