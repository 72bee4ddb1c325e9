//! # Helper Configuration

use super::errors::HelperError;
use serde::{Deserialize, Serialize};
use std::env;
use xh_01_address_codec::NetworkPrefix;

/// Status channel capacity when none is configured.
pub const DEFAULT_STATUS_CAPACITY: usize = 32;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Node endpoint.
    pub node_url: String,
    /// Network prefix used to normalize native addresses.
    pub ss58_prefix: u16,
    /// Bounded capacity of each status channel.
    pub status_channel_capacity: usize,
    /// Raise unless `Success` when the caller does not say otherwise.
    pub must_succeed_by_default: bool,
    /// Keep a per-signer next-nonce cache.
    pub nonce_cache: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            node_url: "ws://127.0.0.1:9944".to_string(),
            ss58_prefix: NetworkPrefix::GENERIC.value(),
            status_channel_capacity: DEFAULT_STATUS_CAPACITY,
            must_succeed_by_default: true,
            nonce_cache: true,
        }
    }
}

impl HelperConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XH_NODE_URL`: Node endpoint (default: ws://127.0.0.1:9944)
    /// - `XH_SS58_PREFIX`: Network prefix (default: 42)
    /// - `XH_STATUS_CHANNEL_CAPACITY`: Status channel capacity (default: 32)
    /// - `XH_MUST_SUCCEED`: Must-succeed default (default: true)
    /// - `XH_NONCE_CACHE`: Enable the nonce cache (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            node_url: env::var("XH_NODE_URL").unwrap_or(defaults.node_url),

            ss58_prefix: env::var("XH_SS58_PREFIX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ss58_prefix),

            status_channel_capacity: env::var("XH_STATUS_CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_channel_capacity),

            must_succeed_by_default: env::var("XH_MUST_SUCCEED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.must_succeed_by_default),

            nonce_cache: env::var("XH_NONCE_CACHE")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.nonce_cache),
        }
    }

    /// Validated network prefix.
    pub fn prefix(&self) -> Result<NetworkPrefix, HelperError> {
        Ok(NetworkPrefix::new(self.ss58_prefix)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), HelperError> {
        if self.node_url.is_empty() {
            return Err(HelperError::InvalidConfig("node_url is empty".to_string()));
        }
        self.prefix()?;
        if self.status_channel_capacity == 0 {
            return Err(HelperError::InvalidConfig(
                "status_channel_capacity must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
