//! Table provisioning for the auto-create option.
//!
//! Creates the backing table with the configured partition-key field as its
//! sole hash key and fixed provisioned throughput. A table that already
//! exists is not an error; anything else fails adapter construction.

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use attribstore_core::persistence::{PersistenceError, Result};

use super::config::DynamoDbAdapterConfig;
use super::error::service_message;

const READ_CAPACITY_UNITS: i64 = 5;
const WRITE_CAPACITY_UNITS: i64 = 5;

pub(super) async fn create_table_if_missing(
    client: &Client,
    config: &DynamoDbAdapterConfig,
) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key_name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| provisioning_failed(&config.table_name, e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key_name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| provisioning_failed(&config.table_name, e.to_string()))?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(READ_CAPACITY_UNITS)
        .write_capacity_units(WRITE_CAPACITY_UNITS)
        .build()
        .map_err(|e| provisioning_failed(&config.table_name, e.to_string()))?;

    match client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .provisioned_throughput(throughput)
        .send()
        .await
    {
        Ok(_) => {
            tracing::info!(table = %config.table_name, "created attributes table");
            Ok(())
        }
        Err(err) => {
            let service_err = err.into_service_error();
            if is_table_already_exists(&service_err) {
                tracing::debug!(table = %config.table_name, "attributes table already exists");
                Ok(())
            } else {
                Err(provisioning_failed(
                    &config.table_name,
                    service_message(&service_err),
                ))
            }
        }
    }
}

/// Structural check for the "table already exists" condition. Message text is
/// never consulted.
fn is_table_already_exists(err: &CreateTableError) -> bool {
    matches!(err, CreateTableError::ResourceInUseException(_))
}

fn provisioning_failed(table_name: &str, message: impl Into<String>) -> PersistenceError {
    PersistenceError::ProvisioningFailed {
        table_name: table_name.to_string(),
        message: message.into(),
    }
}
