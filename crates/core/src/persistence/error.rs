use std::fmt;

use thiserror::Error;

/// The store operation that failed.
///
/// Supplies the verb and preposition for the diagnostic message format, which
/// callers are allowed to match on and therefore must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Read,
    Save,
    Delete,
}

impl StoreOperation {
    /// The verb used in the diagnostic message.
    pub fn verb(&self) -> &'static str {
        match self {
            StoreOperation::Read => "read",
            StoreOperation::Save => "save",
            StoreOperation::Delete => "delete",
        }
    }

    /// The preposition used in the diagnostic message.
    pub fn preposition(&self) -> &'static str {
        match self {
            StoreOperation::Read | StoreOperation::Delete => "from",
            StoreOperation::Save => "to",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Errors that can occur when deriving a partition key or talking to the
/// backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A generator strategy could not derive an identifier because the
    /// required context field is missing or empty.
    #[error("Cannot retrieve {field} from the request context")]
    IdentifierUnavailable { field: &'static str },

    /// Auto-provisioning the backing table failed at construction time for a
    /// reason other than the table already existing.
    #[error("Could not create table ({table_name}): {message}")]
    ProvisioningFailed { table_name: String, message: String },

    /// A read/save/delete against the backing store failed.
    #[error(
        "Could not {operation} item ({partition_key}) {prep} table ({table_name}): {message}",
        prep = .operation.preposition()
    )]
    StoreOperationFailed {
        operation: StoreOperation,
        partition_key: String,
        table_name: String,
        message: String,
    },
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
