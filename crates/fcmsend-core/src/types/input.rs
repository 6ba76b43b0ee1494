//! Notification input file

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::{Error, Result};

/// User-visible part of the notification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    /// Link handed to the app through the data block
    pub url: String,
}

/// A notification as described by the input file
///
/// ```json
/// {
///   "apiKey": "AAAA...",
///   "notification": {"title": "Hi", "body": "Hello", "url": "https://example.com"},
///   "registrationId": "device-token",
///   "topic": "news"
/// }
/// ```
///
/// `registrationId` and `topic` are optional; a JSON `null` counts as absent.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputNotification {
    pub api_key: String,
    pub notification: NotificationContent,
    #[serde(default)]
    pub registration_id: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl InputNotification {
    /// Decode an input document.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    /// Read and decode the input file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content)
            .map_err(|e| Error::InvalidInput(format!("{}: {}", path.display(), e)))
    }

    /// Value of the `Authorization` header for this notification.
    pub fn authorization(&self) -> String {
        format!("key={}", self.api_key)
    }
}

// apiKey is a credential
impl fmt::Debug for InputNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputNotification")
            .field("api_key", &"***")
            .field("notification", &self.notification)
            .field("registration_id", &self.registration_id)
            .field("topic", &self.topic)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOPIC_INPUT: &str =
        r#"{"apiKey":"K","notification":{"title":"T","body":"B","url":"U"},"topic":"news"}"#;

    #[test]
    fn test_parse_topic_input() {
        let input = InputNotification::parse(TOPIC_INPUT).unwrap();
        assert_eq!(input.api_key, "K");
        assert_eq!(input.notification.title, "T");
        assert_eq!(input.notification.body, "B");
        assert_eq!(input.notification.url, "U");
        assert_eq!(input.topic.as_deref(), Some("news"));
        assert!(input.registration_id.is_none());
    }

    #[test]
    fn test_null_optional_fields_are_absent() {
        let input = InputNotification::parse(
            r#"{"apiKey":"K","notification":{"title":"T","body":"B","url":"U"},
                "registrationId":null,"topic":null,"extra":1}"#,
        )
        .unwrap();
        assert!(input.registration_id.is_none());
        assert!(input.topic.is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        let err = InputNotification::parse(r#"{"notification":{"title":"T","body":"B","url":"U"}}"#)
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("apiKey"));

        let err = InputNotification::parse(r#"{"apiKey":"K","notification":{"title":"T"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn test_malformed_json() {
        let err = InputNotification::parse("{not json").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = InputNotification::parse("null").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TOPIC_INPUT.as_bytes()).unwrap();

        let input = InputNotification::from_file(file.path()).unwrap();
        assert_eq!(input.topic.as_deref(), Some("news"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = InputNotification::from_file("/nonexistent/notification.json").unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_authorization_and_debug() {
        let input = InputNotification::parse(TOPIC_INPUT).unwrap();
        assert_eq!(input.authorization(), "key=K");

        let debug = format!("{:?}", input);
        assert!(debug.contains("***"));
        assert!(!debug.contains("\"K\""));
    }
}
