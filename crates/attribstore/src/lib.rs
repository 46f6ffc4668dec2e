//! Store backends for attribstore.
//!
//! Implements the `PersistenceAdapter` trait from `attribstore_core` against
//! concrete stores. The in-memory backend ships by default for tests and
//! local development; the DynamoDB backend is enabled with the `dynamodb`
//! feature.

pub mod storage;

pub use attribstore_core::context::RequestContext;
pub use attribstore_core::partition::PartitionKeyGenerator;
pub use attribstore_core::persistence::{
    AttributesDocument, PersistenceAdapter, PersistenceError, Result, StoreOperation,
};
