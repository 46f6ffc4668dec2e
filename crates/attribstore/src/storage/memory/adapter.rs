//! In-memory persistence adapter.
//!
//! Thread-safe map-backed implementation of the `PersistenceAdapter` trait
//! for tests and local development. Behaves like the DynamoDB backend for
//! the operations the trait defines: reads of missing records return the
//! empty document, saves replace the whole document, deletes are idempotent.
//! Store operations never fail; generator failures propagate unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use attribstore_core::context::RequestContext;
use attribstore_core::partition::PartitionKeyGenerator;
use attribstore_core::persistence::{AttributesDocument, PersistenceAdapter, Result};

/// In-memory persistence adapter.
///
/// Clones share the same underlying map, so a test can hold a handle to the
/// store it handed to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistenceAdapter {
    records: Arc<RwLock<HashMap<String, AttributesDocument>>>,
    partition_key_generator: PartitionKeyGenerator,
}

impl MemoryPersistenceAdapter {
    /// Creates an empty adapter with the user-id key strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the partition-key derivation strategy.
    pub fn with_partition_key_generator(mut self, generator: PartitionKeyGenerator) -> Self {
        self.partition_key_generator = generator;
        self
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryPersistenceAdapter {
    async fn get_attributes(&self, context: &RequestContext) -> Result<AttributesDocument> {
        let partition_key = self.partition_key_generator.derive_identifier(context)?;

        let records = self.records.read().await;
        Ok(records.get(&partition_key).cloned().unwrap_or_default())
    }

    async fn save_attributes(
        &self,
        context: &RequestContext,
        attributes: &AttributesDocument,
    ) -> Result<()> {
        let partition_key = self.partition_key_generator.derive_identifier(context)?;

        let mut records = self.records.write().await;
        records.insert(partition_key, attributes.clone());
        Ok(())
    }

    async fn delete_attributes(&self, context: &RequestContext) -> Result<()> {
        let partition_key = self.partition_key_generator.derive_identifier(context)?;

        let mut records = self.records.write().await;
        records.remove(&partition_key);
        Ok(())
    }
}
