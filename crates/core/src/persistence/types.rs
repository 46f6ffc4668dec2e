use std::collections::HashMap;

use serde_json::Value;

/// The JSON-serializable mapping stored and retrieved per partition key.
///
/// The whole document is replaced on save; an absent record reads back as an
/// empty mapping.
pub type AttributesDocument = HashMap<String, Value>;
