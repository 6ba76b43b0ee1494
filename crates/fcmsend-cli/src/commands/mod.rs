//! CLI command implementations

pub mod send;

use fcmsend_core::ForwarderConfig;
use tracing::debug;

/// Context passed to all commands
pub struct CommandContext {
    pub config: ForwarderConfig,
}

impl CommandContext {
    pub fn new(config: ForwarderConfig) -> Self {
        Self { config }
    }

    /// Log the effective configuration at debug level
    pub fn log_config(&self) {
        debug!(
            endpoint = %self.config.endpoint,
            tls_verify = self.config.tls.verify,
            timeout_secs = ?self.config.timeout_secs,
            "Effective configuration"
        );
    }
}
