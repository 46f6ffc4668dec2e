//! DynamoDB store backend.
//!
//! Implements the `PersistenceAdapter` trait from
//! `attribstore_core::persistence` using `aws-sdk-dynamodb`. One record is
//! kept per partition key, with the attributes document stored as a map
//! attribute on the record.

mod adapter;
mod config;
mod conversions;
mod error;
mod provision;

pub use adapter::DynamoDbPersistenceAdapter;
pub use config::DynamoDbAdapterConfig;
