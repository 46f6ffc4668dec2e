//! Partition-key derivation strategies.
//!
//! Pure functions over the request context. All strategies are sync, have no
//! side effects, and fail with `IdentifierUnavailable` when the field they
//! need is missing. An empty string counts as missing: the derived identifier
//! must be non-empty to be usable as a partition key.

use crate::context::RequestContext;
use crate::persistence::{PersistenceError, Result};

/// Strategy for deriving the partition key from a request context.
///
/// Exactly one strategy is selected per adapter instance. The person and
/// locale strategies fall back to the user strategy when their field is
/// absent, so a skill can opt into finer-grained storage without losing
/// existing users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartitionKeyGenerator {
    /// Keys records by the user identifier.
    #[default]
    UserId,
    /// Keys records by the device identifier.
    DeviceId,
    /// Keys records by the recognized person, falling back to the user.
    PersonId,
    /// Keys records by the request locale, falling back to the user.
    Locale,
}

impl PartitionKeyGenerator {
    /// Derives a non-empty partition key from the context.
    pub fn derive_identifier(&self, context: &RequestContext) -> Result<String> {
        match self {
            PartitionKeyGenerator::UserId => non_empty(
                context.user.as_ref().map(|u| u.user_id.as_str()),
                "user id",
            ),
            PartitionKeyGenerator::DeviceId => non_empty(
                context.device.as_ref().map(|d| d.device_id.as_str()),
                "device id",
            ),
            PartitionKeyGenerator::PersonId => {
                match non_empty(
                    context.person.as_ref().map(|p| p.person_id.as_str()),
                    "person id",
                ) {
                    Ok(id) => Ok(id),
                    Err(_) => PartitionKeyGenerator::UserId.derive_identifier(context),
                }
            }
            PartitionKeyGenerator::Locale => match non_empty(context.locale.as_deref(), "locale") {
                Ok(locale) => Ok(locale),
                Err(_) => PartitionKeyGenerator::UserId.derive_identifier(context),
            },
        }
    }
}

fn non_empty(value: Option<&str>, field: &'static str) -> Result<String> {
    match value {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(PersistenceError::IdentifierUnavailable { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_only_context() -> RequestContext {
        RequestContext::new().with_user("userId")
    }

    #[test]
    fn test_user_id_strategy() {
        let context = user_only_context();
        assert_eq!(
            PartitionKeyGenerator::UserId
                .derive_identifier(&context)
                .unwrap(),
            "userId"
        );
    }

    #[test]
    fn test_user_id_strategy_missing_user() {
        let result = PartitionKeyGenerator::UserId.derive_identifier(&RequestContext::new());
        assert_eq!(
            result,
            Err(PersistenceError::IdentifierUnavailable { field: "user id" })
        );
    }

    #[test]
    fn test_device_id_strategy() {
        let context = RequestContext::new().with_device("deviceId");
        assert_eq!(
            PartitionKeyGenerator::DeviceId
                .derive_identifier(&context)
                .unwrap(),
            "deviceId"
        );
    }

    #[test]
    fn test_device_id_strategy_fails_with_user_only() {
        // Presence of a user identifier does not help the device strategy.
        let context = user_only_context();
        assert_eq!(
            PartitionKeyGenerator::DeviceId.derive_identifier(&context),
            Err(PersistenceError::IdentifierUnavailable { field: "device id" })
        );
    }

    #[test]
    fn test_person_id_strategy_prefers_person() {
        let context = user_only_context().with_person("personId");
        assert_eq!(
            PartitionKeyGenerator::PersonId
                .derive_identifier(&context)
                .unwrap(),
            "personId"
        );
    }

    #[test]
    fn test_person_id_strategy_falls_back_to_user() {
        let context = user_only_context();
        assert_eq!(
            PartitionKeyGenerator::PersonId
                .derive_identifier(&context)
                .unwrap(),
            "userId"
        );
    }

    #[test]
    fn test_person_id_strategy_fails_when_both_missing() {
        let result = PartitionKeyGenerator::PersonId.derive_identifier(&RequestContext::new());
        assert_eq!(
            result,
            Err(PersistenceError::IdentifierUnavailable { field: "user id" })
        );
    }

    #[test]
    fn test_locale_strategy_prefers_locale() {
        let context = user_only_context().with_locale("en-US");
        assert_eq!(
            PartitionKeyGenerator::Locale
                .derive_identifier(&context)
                .unwrap(),
            "en-US"
        );
    }

    #[test]
    fn test_locale_strategy_falls_back_to_user() {
        let context = user_only_context();
        assert_eq!(
            PartitionKeyGenerator::Locale
                .derive_identifier(&context)
                .unwrap(),
            "userId"
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let context = RequestContext::new().with_user("");
        assert_eq!(
            PartitionKeyGenerator::UserId.derive_identifier(&context),
            Err(PersistenceError::IdentifierUnavailable { field: "user id" })
        );

        // An empty person id falls through to the user id.
        let context = RequestContext::new().with_user("userId").with_person("");
        assert_eq!(
            PartitionKeyGenerator::PersonId
                .derive_identifier(&context)
                .unwrap(),
            "userId"
        );
    }

    #[test]
    fn test_default_is_user_id() {
        assert_eq!(
            PartitionKeyGenerator::default(),
            PartitionKeyGenerator::UserId
        );
    }

    #[test]
    fn test_strategies_fail_when_everything_missing() {
        let context = RequestContext::new();
        assert!(PartitionKeyGenerator::UserId
            .derive_identifier(&context)
            .is_err());
        assert!(PartitionKeyGenerator::DeviceId
            .derive_identifier(&context)
            .is_err());
        assert!(PartitionKeyGenerator::PersonId
            .derive_identifier(&context)
            .is_err());
        assert!(PartitionKeyGenerator::Locale
            .derive_identifier(&context)
            .is_err());
    }
}
