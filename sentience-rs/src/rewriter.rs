// sentience-rs/src/rewriter.rs
// File-rewriting service.
//
// Does a single pass over the configured target files, appending the cached
// criticisms as comment lines. The append is a blind text-level operation
// regardless of the target file's format: no locking, no atomic replace,
// no backup of the original file.

use std::any::Any;

use tokio::fs;
use tracing::instrument;

use plugin_sdk::{AgentRuntime, Service};

use crate::cache::CriticismCache;
use crate::config::SentienceConfig;

/// Header line prepended to each appended suggestion block.
const SUGGESTIONS_HEADER: &str = "\n\n// Self-Improvement Suggestions:\n";

/// Service that rewrites the configured files using cached criticisms.
pub struct SelfImprovementService {
    cache: CriticismCache,
}

impl SelfImprovementService {
    /// Name used to register/retrieve this service in the runtime.
    pub const NAME: &'static str = "SelfImprovementService";

    /// Create a service reading from the given cache.
    pub fn new(cache: CriticismCache) -> Self {
        Self { cache }
    }

    /// The cache this service reads from. Exposed so hosts can `drain` or
    /// `clear` it when they want accumulate-then-reset semantics.
    pub fn cache(&self) -> &CriticismCache {
        &self.cache
    }

    /// Run a rewrite pass using the currently cached criticisms.
    ///
    /// The cache is snapshotted, not drained: a second call appends the same
    /// entries again unless the host resets the cache in between.
    pub async fn rewrite_cached(&self, runtime: &dyn AgentRuntime) -> String {
        let criticisms = self.cache.snapshot();
        self.rewrite_files(runtime, &criticisms).await
    }

    /// Do a single pass of rewriting the target files, appending the given
    /// criticisms to each as numbered comment lines.
    ///
    /// Files are processed one at a time, in configured order, and failures
    /// are isolated per file: a path that cannot be read or written only
    /// contributes a failure line to the returned summary. This method never
    /// returns an error to the caller.
    #[instrument(
        name = "sentience_rewrite_files",
        skip(self, runtime, criticisms),
        fields(criticisms = criticisms.len())
    )]
    pub async fn rewrite_files(
        &self,
        runtime: &dyn AgentRuntime,
        criticisms: &[String],
    ) -> String {
        let config = SentienceConfig::from_runtime(runtime);

        if config.file_paths.is_empty() {
            return "No file paths configured for Sentience plugin.".to_string();
        }

        if criticisms.is_empty() {
            return "No criticisms found. Skipping self-improvement.".to_string();
        }

        let mut summary = String::new();
        for relative_path in &config.file_paths {
            match self.rewrite_one(relative_path, criticisms).await {
                Ok(()) => {
                    summary.push_str(&format!("Updated file: {}\n", relative_path));
                }
                Err(err) => {
                    tracing::warn!(path = %relative_path, error = %err, "failed to rewrite file");
                    summary.push_str(&format!(
                        "Failed to update file: {} (error: {})\n",
                        relative_path, err
                    ));
                }
            }
        }

        summary.trim().to_string()
    }

    async fn rewrite_one(
        &self,
        relative_path: &str,
        criticisms: &[String],
    ) -> std::io::Result<()> {
        let absolute_path = std::path::absolute(relative_path)?;

        let original_content = fs::read_to_string(&absolute_path).await?;

        // Append the criticisms as a comment block, 1-indexed.
        let mut new_content = original_content;
        new_content.push_str(SUGGESTIONS_HEADER);
        for (i, criticism) in criticisms.iter().enumerate() {
            new_content.push_str(&format!("// [{}] {}\n", i + 1, criticism));
        }

        fs::write(&absolute_path, new_content).await
    }
}

impl Service for SelfImprovementService {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
