use async_trait::async_trait;

use crate::context::RequestContext;

use super::{AttributesDocument, Result};

/// Store-backed access to one attributes document per partition key.
///
/// Implementations derive the partition key from the request context and issue
/// a single point operation against their backing store. Operations carry no
/// state between calls; retries and timeouts are left to the store client.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Gets the attributes document for the context's partition key.
    ///
    /// Returns an empty document when no record exists.
    async fn get_attributes(&self, context: &RequestContext) -> Result<AttributesDocument>;

    /// Replaces the attributes document for the context's partition key.
    async fn save_attributes(
        &self,
        context: &RequestContext,
        attributes: &AttributesDocument,
    ) -> Result<()>;

    /// Deletes the record for the context's partition key.
    async fn delete_attributes(&self, context: &RequestContext) -> Result<()>;
}
