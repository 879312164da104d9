// sentience-rs/src/config.rs
// Configuration for the Sentience plugin.

use plugin_sdk::AgentRuntime;

/// Setting holding the comma-separated list of files the rewrite operation
/// may touch.
pub const FILE_PATHS_SETTING: &str = "SENTIENCE_FILE_PATHS";

/// Resolved configuration for a rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct SentienceConfig {
    /// Target file paths, in configured order. Entries are trimmed and
    /// empties dropped; existence and writability are not checked up front,
    /// failures are detected per file.
    pub file_paths: Vec<String>,
}

impl SentienceConfig {
    /// Resolve configuration from runtime settings.
    ///
    /// This helper is intentionally conservative and never panics: a
    /// missing setting simply yields an empty path list.
    pub fn from_runtime(runtime: &dyn AgentRuntime) -> Self {
        let raw = runtime.get_setting(FILE_PATHS_SETTING).unwrap_or_default();

        let file_paths = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self { file_paths }
    }
}
