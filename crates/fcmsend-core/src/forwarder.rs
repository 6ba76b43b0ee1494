//! Notification forwarder
//!
//! Turns an input file into an [`OutgoingPayload`] and POSTs it to the push
//! endpoint in a single request. There are no retries; the response body is
//! handed back untouched for the caller to print.

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::types::{InputNotification, OutgoingPayload};
use crate::{Error, ForwarderConfig, Result};

/// What the push endpoint answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status code, informational only
    pub status: u16,
    /// Response body exactly as received, not decoded
    pub body: Bytes,
}

pub struct Forwarder {
    client: Client,
    config: ForwarderConfig,
}

impl Forwarder {
    pub fn new(config: ForwarderConfig) -> Result<Self> {
        config.validate()?;

        let mut builder =
            ClientBuilder::new().user_agent(concat!("fcmsend/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        if !config.tls.verify {
            warn!("TLS certificate verification is disabled for {}", config.endpoint);
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Read the notification at `path` and forward it.
    ///
    /// Input errors are returned before any request is made.
    pub async fn send(&self, path: impl AsRef<Path>) -> Result<Delivery> {
        let path = path.as_ref();
        debug!("Reading notification from {}", path.display());

        let input = InputNotification::from_file(path)?;
        self.send_notification(&input).await
    }

    pub async fn send_notification(&self, input: &InputNotification) -> Result<Delivery> {
        let target = input.target();
        if target.is_unspecified() {
            warn!("Notification has neither registrationId nor topic; sending anyway");
        }

        let payload = OutgoingPayload::with_target(input, &target);
        let json = payload.to_json()?;

        info!(
            "Sending notification to {} via {} ({} bytes)",
            target,
            self.config.endpoint,
            json.len()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, input.authorization())
            .header(CONTENT_TYPE, "application/json")
            .body(json)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!(
            target_kind = target.kind(),
            status = status.as_u16(),
            bytes = body.len(),
            "Push endpoint responded"
        );

        Ok(Delivery {
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forwarder")
            .field("config", &self.config)
            .finish()
    }
}
