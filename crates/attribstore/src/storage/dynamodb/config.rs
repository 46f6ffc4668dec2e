use attribstore_core::partition::PartitionKeyGenerator;

/// Attribute name the partition key is stored under when not configured.
pub const DEFAULT_PARTITION_KEY_NAME: &str = "id";

/// Attribute name the document is stored under when not configured.
pub const DEFAULT_ATTRIBUTES_NAME: &str = "attributes";

/// Configuration for the DynamoDB adapter.
///
/// Immutable once the adapter takes ownership: the `with_*` methods consume
/// `self` and there are no setters afterwards.
#[derive(Debug, Clone)]
pub struct DynamoDbAdapterConfig {
    /// Name of the backing table.
    pub table_name: String,
    /// Attribute name used as the table's hash key (default: "id").
    pub partition_key_name: String,
    /// Attribute name the document is stored under (default: "attributes").
    pub attributes_name: String,
    /// Provision the table at construction time if it does not exist.
    pub create_table: bool,
    /// Strategy used to derive the partition key (default: user id).
    pub partition_key_generator: PartitionKeyGenerator,
}

impl DynamoDbAdapterConfig {
    /// Creates a configuration for the given table with default field names,
    /// no auto-provisioning, and the user-id key strategy.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key_name: DEFAULT_PARTITION_KEY_NAME.to_string(),
            attributes_name: DEFAULT_ATTRIBUTES_NAME.to_string(),
            create_table: false,
            partition_key_generator: PartitionKeyGenerator::default(),
        }
    }

    /// Overrides the hash-key attribute name.
    pub fn with_partition_key_name(mut self, name: impl Into<String>) -> Self {
        self.partition_key_name = name.into();
        self
    }

    /// Overrides the attribute name the document is stored under.
    pub fn with_attributes_name(mut self, name: impl Into<String>) -> Self {
        self.attributes_name = name.into();
        self
    }

    /// Requests table provisioning at construction time.
    pub fn with_create_table(mut self, create_table: bool) -> Self {
        self.create_table = create_table;
        self
    }

    /// Selects the partition-key derivation strategy.
    pub fn with_partition_key_generator(mut self, generator: PartitionKeyGenerator) -> Self {
        self.partition_key_generator = generator;
        self
    }
}
