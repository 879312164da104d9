//! Configuration for the AutoTA plugin
//!
//! Settings are resolved per call from the runtime handle; an absent or
//! empty setting falls back to the hard-coded default.

use std::time::Duration;

use plugin_sdk::http::DEFAULT_TIMEOUT_SECONDS;
use plugin_sdk::AgentRuntime;

/// Setting that overrides the chart endpoint.
pub const ENDPOINT_SETTING: &str = "AUTOTA_ENDPOINT";

/// Setting that overrides the request timeout, in seconds.
pub const TIMEOUT_SETTING: &str = "AUTOTA_TIMEOUT_SECONDS";

/// Default endpoint used when no setting is present.
pub const DEFAULT_ENDPOINT: &str = "https://artificialcz.com/api0/autota/";

/// Per-call configuration for the AutoTA service.
#[derive(Debug, Clone)]
pub struct AutoTaConfig {
    /// Endpoint URL. Not validated up front; a malformed URL surfaces as a
    /// request failure.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for AutoTaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl AutoTaConfig {
    /// Resolve configuration from runtime settings, falling back to defaults.
    pub fn from_runtime(runtime: &dyn AgentRuntime) -> Self {
        let endpoint = runtime
            .get_setting(ENDPOINT_SETTING)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_seconds = runtime
            .get_setting(TIMEOUT_SETTING)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            endpoint,
            timeout_seconds,
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
