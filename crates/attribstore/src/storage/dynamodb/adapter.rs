//! DynamoDB persistence adapter.
//!
//! Implements the `PersistenceAdapter` trait from
//! `attribstore_core::persistence` with single point operations per call.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use attribstore_core::context::RequestContext;
use attribstore_core::persistence::{
    AttributesDocument, PersistenceAdapter, Result, StoreOperation,
};

use super::config::DynamoDbAdapterConfig;
use super::conversions::{document_to_item, item_to_document};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, store_failure,
};
use super::provision;

/// DynamoDB-backed persistence adapter.
///
/// Keeps one record per partition key. Configuration is read-only for the
/// adapter's lifetime, so concurrent operations share the instance without
/// locking.
pub struct DynamoDbPersistenceAdapter {
    client: Client,
    config: DynamoDbAdapterConfig,
}

impl DynamoDbPersistenceAdapter {
    /// Creates an adapter with the given DynamoDB client and configuration.
    ///
    /// When the configuration requests auto-creation, the backing table is
    /// provisioned before the adapter is returned. A table that already
    /// exists is fine; any other provisioning failure rejects construction.
    pub async fn new(client: Client, config: DynamoDbAdapterConfig) -> Result<Self> {
        if config.create_table {
            provision::create_table_if_missing(&client, &config).await?;
        }
        Ok(Self { client, config })
    }

    /// Creates an adapter with a client built from the AWS SDK default
    /// credential chain.
    pub async fn from_env(config: DynamoDbAdapterConfig) -> Result<Self> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);

        Self::new(client, config).await
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.config.table_name
    }
}

#[async_trait]
impl PersistenceAdapter for DynamoDbPersistenceAdapter {
    async fn get_attributes(&self, context: &RequestContext) -> Result<AttributesDocument> {
        let partition_key = self
            .config
            .partition_key_generator
            .derive_identifier(context)?;
        tracing::debug!(table = %self.config.table_name, %partition_key, "reading attributes");

        let result = self
            .client
            .get_item()
            .table_name(&self.config.table_name)
            .key(
                &self.config.partition_key_name,
                AttributeValue::S(partition_key.clone()),
            )
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &partition_key, &self.config.table_name))?;

        match result.item {
            Some(item) => item_to_document(&self.config.attributes_name, &item).map_err(|e| {
                store_failure(
                    StoreOperation::Read,
                    &partition_key,
                    &self.config.table_name,
                    e.to_string(),
                )
            }),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_attributes(
        &self,
        context: &RequestContext,
        attributes: &AttributesDocument,
    ) -> Result<()> {
        let partition_key = self
            .config
            .partition_key_generator
            .derive_identifier(context)?;
        tracing::debug!(table = %self.config.table_name, %partition_key, "saving attributes");

        let item = document_to_item(
            &self.config.partition_key_name,
            &self.config.attributes_name,
            &partition_key,
            attributes,
        );

        self.client
            .put_item()
            .table_name(&self.config.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &partition_key, &self.config.table_name))?;

        Ok(())
    }

    async fn delete_attributes(&self, context: &RequestContext) -> Result<()> {
        let partition_key = self
            .config
            .partition_key_generator
            .derive_identifier(context)?;
        tracing::debug!(table = %self.config.table_name, %partition_key, "deleting attributes");

        self.client
            .delete_item()
            .table_name(&self.config.table_name)
            .key(
                &self.config.partition_key_name,
                AttributeValue::S(partition_key.clone()),
            )
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, &partition_key, &self.config.table_name))?;

        Ok(())
    }
}
