//! Outgoing push payload
//!
//! Mirrors the FCM legacy HTTP message body:
//!
//! ```json
//! {
//!   "notification": {"title": "...", "body": "...", "icon": "ic_notification", "sound": "default"},
//!   "data": {"url": "...", "click_action": "FLUTTER_NOTIFICATION_CLICK"},
//!   "registration_ids": ["..."],
//!   "to": "/topics/..."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::InputNotification;
use crate::{CLICK_ACTION, NOTIFICATION_ICON, NOTIFICATION_SOUND, TOPIC_PREFIX};

// ============================================================================
// Target
// ============================================================================

/// Recipients of a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single device token
    Registration(String),
    /// All devices subscribed to a topic
    Topic(String),
    /// Both fields are sent; the provider decides precedence
    RegistrationAndTopic { registration_id: String, topic: String },
    /// No recipient; the provider is expected to reject the request
    Unspecified,
}

impl Target {
    pub fn from_parts(registration_id: Option<String>, topic: Option<String>) -> Self {
        match (registration_id, topic) {
            (Some(registration_id), Some(topic)) => Target::RegistrationAndTopic {
                registration_id,
                topic,
            },
            (Some(registration_id), None) => Target::Registration(registration_id),
            (None, Some(topic)) => Target::Topic(topic),
            (None, None) => Target::Unspecified,
        }
    }

    /// Value of the `registration_ids` field, if any
    pub fn registration_ids(&self) -> Option<Vec<String>> {
        match self {
            Target::Registration(id) | Target::RegistrationAndTopic { registration_id: id, .. } => {
                Some(vec![id.clone()])
            }
            Target::Topic(_) | Target::Unspecified => None,
        }
    }

    /// Value of the `to` field, if any
    pub fn to(&self) -> Option<String> {
        match self {
            Target::Topic(topic) | Target::RegistrationAndTopic { topic, .. } => {
                Some(format!("{}{}", TOPIC_PREFIX, topic))
            }
            Target::Registration(_) | Target::Unspecified => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Target::Registration(_) => "registration",
            Target::Topic(_) => "topic",
            Target::RegistrationAndTopic { .. } => "registration+topic",
            Target::Unspecified => "unspecified",
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Target::Unspecified)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Registration(_) => write!(f, "registration id"),
            Target::Topic(topic) => write!(f, "topic {}", topic),
            Target::RegistrationAndTopic { topic, .. } => {
                write!(f, "registration id and topic {}", topic)
            }
            Target::Unspecified => write!(f, "no target"),
        }
    }
}

// ============================================================================
// Payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationBlock {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub sound: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBlock {
    pub url: String,
    pub click_action: String,
}

/// JSON body posted to the push endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingPayload {
    pub notification: NotificationBlock,
    pub data: DataBlock,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub registration_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to: Option<String>,
}

impl OutgoingPayload {
    pub fn new(input: &InputNotification) -> Self {
        Self::with_target(input, &input.target())
    }

    pub fn with_target(input: &InputNotification, target: &Target) -> Self {
        Self {
            notification: NotificationBlock {
                title: input.notification.title.clone(),
                body: input.notification.body.clone(),
                icon: NOTIFICATION_ICON.to_string(),
                sound: NOTIFICATION_SOUND.to_string(),
            },
            data: DataBlock {
                url: input.notification.url.clone(),
                click_action: CLICK_ACTION.to_string(),
            },
            registration_ids: target.registration_ids(),
            to: target.to(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl InputNotification {
    pub fn target(&self) -> Target {
        Target::from_parts(self.registration_id.clone(), self.topic.clone())
    }
}
