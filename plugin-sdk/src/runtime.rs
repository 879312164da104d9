//! Host-runtime contract for plugins
//!
//! The host runtime is an external collaborator; this module models it as an
//! injected dependency interface rather than a global. Plugins read named
//! settings and retrieve registered services through [`AgentRuntime`], and
//! the SDK ships two implementations: [`MemoryRuntime`] for tests and static
//! embeddings, and [`EnvRuntime`] which resolves settings from environment
//! variables.

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::plugin::{Plugin, Service};

/// Capability handle the host runtime passes into every plugin call.
pub trait AgentRuntime: Send + Sync {
    /// Read a named configuration setting, if present.
    fn get_setting(&self, key: &str) -> Option<String>;

    /// Retrieve a registered service by name.
    fn get_service(&self, name: &str) -> Option<Arc<dyn Service>>;
}

/// In-memory runtime for testing or static configuration.
#[derive(Default)]
pub struct MemoryRuntime {
    /// Configuration settings.
    settings: HashMap<String, String>,

    /// Registered services, keyed by service name.
    services: HashMap<String, Arc<dyn Service>>,
}

impl MemoryRuntime {
    /// Create a new empty in-memory runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a configuration setting.
    pub fn set_setting<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: ToString,
    {
        self.settings.insert(key.into(), value.to_string());
    }

    /// Register a service under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register_service(&mut self, service: Arc<dyn Service>) {
        self.services.insert(service.name().to_string(), service);
    }

    /// Register every service a plugin provides.
    pub fn install(&mut self, plugin: &Plugin) {
        for service in &plugin.services {
            self.register_service(Arc::clone(service));
        }
    }
}

impl AgentRuntime for MemoryRuntime {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    fn get_service(&self, name: &str) -> Option<Arc<dyn Service>> {
        self.services.get(name).cloned()
    }
}

/// Environment-variable backed runtime.
///
/// Settings resolve to environment variables, optionally behind a prefix;
/// services are registered in memory exactly as with [`MemoryRuntime`].
#[derive(Default)]
pub struct EnvRuntime {
    /// Optional prefix for environment variables.
    prefix: Option<String>,

    /// Registered services, keyed by service name.
    services: HashMap<String, Arc<dyn Service>>,
}

impl EnvRuntime {
    /// Create a new environment-backed runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prefix for environment variables.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Register a service under its own name.
    pub fn register_service(&mut self, service: Arc<dyn Service>) {
        self.services.insert(service.name().to_string(), service);
    }

    /// Register every service a plugin provides.
    pub fn install(&mut self, plugin: &Plugin) {
        for service in &plugin.services {
            self.register_service(Arc::clone(service));
        }
    }

    /// Format a setting key as an environment variable.
    fn format_key(&self, key: &str) -> String {
        let mut env_key = String::new();

        if let Some(ref prefix) = self.prefix {
            env_key.push_str(prefix);
            env_key.push('_');
        }

        // Uppercase and replace non-alphanumeric characters with underscores
        env_key.push_str(
            &key.to_uppercase()
                .replace(|c: char| !c.is_ascii_alphanumeric(), "_"),
        );

        env_key
    }
}

impl AgentRuntime for EnvRuntime {
    fn get_setting(&self, key: &str) -> Option<String> {
        env::var(self.format_key(key)).ok()
    }

    fn get_service(&self, name: &str) -> Option<Arc<dyn Service>> {
        self.services.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_runtime_key_formatting() {
        let runtime = EnvRuntime::new().with_prefix("AICZ");

        assert_eq!(runtime.format_key("agentterminal_endpoint"), "AICZ_AGENTTERMINAL_ENDPOINT");
        assert_eq!(runtime.format_key("auto-ta.endpoint"), "AICZ_AUTO_TA_ENDPOINT");

        let bare = EnvRuntime::new();
        assert_eq!(bare.format_key("SENTIENCE_FILE_PATHS"), "SENTIENCE_FILE_PATHS");
    }

    #[test]
    fn test_memory_runtime_settings() {
        let mut runtime = MemoryRuntime::new();
        runtime.set_setting("AGENTTERMINAL_ENDPOINT", "http://localhost:9999/");

        assert_eq!(
            runtime.get_setting("AGENTTERMINAL_ENDPOINT").as_deref(),
            Some("http://localhost:9999/")
        );
        assert!(runtime.get_setting("AUTOTA_ENDPOINT").is_none());
    }
}
