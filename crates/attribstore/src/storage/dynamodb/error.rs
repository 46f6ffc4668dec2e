//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to the `PersistenceError` diagnostic format from
//! `attribstore_core::persistence`. The rendered message embeds the partition
//! key, the table name, and the service error message.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use attribstore_core::persistence::{PersistenceError, StoreOperation};

/// Map a GetItem SDK error to PersistenceError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    partition_key: &str,
    table_name: &str,
) -> PersistenceError {
    store_failure(
        StoreOperation::Read,
        partition_key,
        table_name,
        service_message(&err.into_service_error()),
    )
}

/// Map a PutItem SDK error to PersistenceError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    partition_key: &str,
    table_name: &str,
) -> PersistenceError {
    store_failure(
        StoreOperation::Save,
        partition_key,
        table_name,
        service_message(&err.into_service_error()),
    )
}

/// Map a DeleteItem SDK error to PersistenceError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    partition_key: &str,
    table_name: &str,
) -> PersistenceError {
    store_failure(
        StoreOperation::Delete,
        partition_key,
        table_name,
        service_message(&err.into_service_error()),
    )
}

/// Build an operation failure carrying the diagnostic fields.
pub fn store_failure(
    operation: StoreOperation,
    partition_key: &str,
    table_name: &str,
    message: String,
) -> PersistenceError {
    PersistenceError::StoreOperationFailed {
        operation,
        partition_key: partition_key.to_string(),
        table_name: table_name.to_string(),
        message,
    }
}

/// Extract the service error message, falling back to the Debug rendering
/// when the service sent none.
pub(super) fn service_message<E: ProvideErrorMetadata + Debug>(err: &E) -> String {
    match err.message() {
        Some(message) => message.to_string(),
        None => format!("{err:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;

    #[test]
    fn test_service_message_prefers_service_text() {
        let err = GetItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .meta(
                    ErrorMetadata::builder()
                        .code("ResourceNotFoundException")
                        .message("Requested resource not found")
                        .build(),
                )
                .build(),
        );

        assert_eq!(service_message(&err), "Requested resource not found");
    }

    #[test]
    fn test_store_failure_renders_save_format() {
        let error = store_failure(
            StoreOperation::Save,
            "userId",
            "NonExistentTable",
            "Requested resource not found".to_string(),
        );

        assert_eq!(
            error.to_string(),
            "Could not save item (userId) to table (NonExistentTable): Requested resource not found"
        );
    }

    #[test]
    fn test_store_failure_renders_read_and_delete_formats() {
        let read = store_failure(
            StoreOperation::Read,
            "userId",
            "mockTableName",
            "boom".to_string(),
        );
        let delete = store_failure(
            StoreOperation::Delete,
            "userId",
            "mockTableName",
            "boom".to_string(),
        );

        assert_eq!(
            read.to_string(),
            "Could not read item (userId) from table (mockTableName): boom"
        );
        assert_eq!(
            delete.to_string(),
            "Could not delete item (userId) from table (mockTableName): boom"
        );
    }
}
