//! fcmsend Core Library
//!
//! Input decoding, payload construction, and delivery of push notifications
//! to the Firebase Cloud Messaging legacy HTTP endpoint.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod types;

pub use config::ForwarderConfig;
pub use error::{Error, Result};
pub use forwarder::{Delivery, Forwarder};

/// fcmsend version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default push endpoint
pub const FCM_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

/// Android notification icon resource name
pub const NOTIFICATION_ICON: &str = "ic_notification";

/// Notification sound
pub const NOTIFICATION_SOUND: &str = "default";

/// Click action understood by Flutter clients
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

/// Prefix prepended to topic names in the `to` field
pub const TOPIC_PREFIX: &str = "/topics/";
