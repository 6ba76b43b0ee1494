//! Notification types
//!
//! - [`InputNotification`]: the notification description read from disk
//! - [`OutgoingPayload`]: the JSON body posted to the push endpoint
//! - [`Target`]: which devices the payload addresses

pub mod input;
pub mod payload;

pub use input::*;
pub use payload::*;
