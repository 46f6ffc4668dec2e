//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! JSON attributes document. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};
use thiserror::Error;

use attribstore_core::persistence::AttributesDocument;

/// Errors that can occur while decoding a stored record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unsupported attribute type for field ({0})")]
    UnsupportedAttribute(String),
    #[error("invalid number ({0})")]
    InvalidNumber(String),
}

/// Build the full record for a partition key: the key attribute plus the
/// document stored as a map attribute.
pub fn document_to_item(
    partition_key_name: &str,
    attributes_name: &str,
    partition_key: &str,
    attributes: &AttributesDocument,
) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        partition_key_name.to_string(),
        AttributeValue::S(partition_key.to_string()),
    );
    item.insert(
        attributes_name.to_string(),
        AttributeValue::M(
            attributes
                .iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    );
    item
}

/// Decode the attributes document out of a stored record.
///
/// A record without the attributes field decodes as the empty document; the
/// key attribute never leaks into the result.
pub fn item_to_document(
    attributes_name: &str,
    item: &HashMap<String, AttributeValue>,
) -> Result<AttributesDocument, ConversionError> {
    match item.get(attributes_name) {
        Some(AttributeValue::M(map)) => map
            .iter()
            .map(|(k, v)| attribute_to_json(k, v).map(|value| (k.clone(), value)))
            .collect(),
        Some(_) => Err(ConversionError::UnsupportedAttribute(
            attributes_name.to_string(),
        )),
        None => Ok(HashMap::new()),
    }
}

/// Convert a JSON value to a DynamoDB attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to a JSON value.
///
/// String sets and number sets decode to arrays. Binary attributes have no
/// JSON representation and fail the decode.
pub fn attribute_to_json(field: &str, value: &AttributeValue) -> Result<Value, ConversionError> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(|v| attribute_to_json(field, v))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(k, v).map(|value| (k.clone(), value)))
            .collect::<Result<serde_json::Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        _ => Err(ConversionError::UnsupportedAttribute(field.to_string())),
    }
}

/// Parse a DynamoDB numeric string, preferring integer representations.
fn parse_number(s: &str) -> Result<Value, ConversionError> {
    if let Ok(i) = s.parse::<i64>() {
        return Ok(Value::Number(Number::from(i)));
    }
    if let Ok(u) = s.parse::<u64>() {
        return Ok(Value::Number(Number::from(u)));
    }
    s.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ConversionError::InvalidNumber(s.to_string()))
}
