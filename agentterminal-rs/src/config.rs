//! Configuration for the AgentTerminal plugin
//!
//! Settings are resolved per call from the runtime handle; an absent or
//! empty setting falls back to the hard-coded default.

use std::time::Duration;

use plugin_sdk::http::DEFAULT_TIMEOUT_SECONDS;
use plugin_sdk::AgentRuntime;

/// Setting that overrides the query endpoint.
pub const ENDPOINT_SETTING: &str = "AGENTTERMINAL_ENDPOINT";

/// Setting that overrides the request timeout, in seconds.
pub const TIMEOUT_SETTING: &str = "AGENTTERMINAL_TIMEOUT_SECONDS";

/// Default endpoint used when no setting is present.
pub const DEFAULT_ENDPOINT: &str = "https://artificialcz.com/api0/agentterminal/";

/// Per-call configuration for the AgentTerminal service.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Endpoint URL. Not validated up front; a malformed URL surfaces as a
    /// request failure.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl TerminalConfig {
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

#[cfg(test)]
mod tests {
    use plugin_sdk::MemoryRuntime;

    use super::*;

    #[test]
    fn test_defaults_when_settings_absent() {
        let runtime = MemoryRuntime::new();
        let config = TerminalConfig::from_runtime(&runtime);

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_setting_overrides_endpoint() {
        let mut runtime = MemoryRuntime::new();
        runtime.set_setting(ENDPOINT_SETTING, "http://localhost:8080/terminal");
        runtime.set_setting(TIMEOUT_SETTING, "5");

        let config = TerminalConfig::from_runtime(&runtime);
        assert_eq!(config.endpoint, "http://localhost:8080/terminal");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_empty_or_invalid_settings_fall_back() {
        let mut runtime = MemoryRuntime::new();
        runtime.set_setting(ENDPOINT_SETTING, "");
        runtime.set_setting(TIMEOUT_SETTING, "soon");

        let config = TerminalConfig::from_runtime(&runtime);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }
}
