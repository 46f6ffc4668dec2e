use serde::{Deserialize, Serialize};

/// The caller-supplied request context used to derive a partition key.
///
/// Every field is optional: which ones are populated depends on the device
/// and the permissions of the incoming request. The struct deserializes
/// directly from a framework request envelope (camelCase field names).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub user: Option<User>,
    pub device: Option<Device>,
    pub person: Option<Person>,
    pub locale: Option<String>,
}

/// The user the request was issued on behalf of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: String,
}

/// The device the request originated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    pub device_id: String,
}

/// The recognized speaker, when person resolution is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub person_id: String,
}

impl RequestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user identifier.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user = Some(User {
            user_id: user_id.into(),
        });
        self
    }

    /// Sets the device identifier.
    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device = Some(Device {
            device_id: device_id.into(),
        });
        self
    }

    /// Sets the person identifier.
    pub fn with_person(mut self, person_id: impl Into<String>) -> Self {
        self.person = Some(Person {
            person_id: person_id.into(),
        });
        self
    }

    /// Sets the request locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let context = RequestContext::new()
            .with_user("amzn1.ask.account.ABC")
            .with_device("amzn1.ask.device.XYZ")
            .with_locale("en-US");

        assert_eq!(context.user.unwrap().user_id, "amzn1.ask.account.ABC");
        assert_eq!(context.device.unwrap().device_id, "amzn1.ask.device.XYZ");
        assert_eq!(context.person, None);
        assert_eq!(context.locale.as_deref(), Some("en-US"));
    }

    #[test]
    fn test_deserialize_camel_case_envelope() {
        let json = r#"{
            "user": { "userId": "userId" },
            "person": { "personId": "personId" },
            "locale": "de-DE"
        }"#;

        let context: RequestContext = serde_json::from_str(json).unwrap();

        assert_eq!(context.user.unwrap().user_id, "userId");
        assert_eq!(context.person.unwrap().person_id, "personId");
        assert_eq!(context.device, None);
        assert_eq!(context.locale.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let context: RequestContext = serde_json::from_str("{}").unwrap();
        assert_eq!(context, RequestContext::default());
    }
}
