// sentience-rs/src/evaluator.rs
// Criticism-collecting evaluator.
//
// Looks at each new message for statements or user feedback that suggest
// improvements and caches them for the rewrite service to use later. The
// evaluator always runs; there is no sentiment or relevance filtering.

use async_trait::async_trait;
use serde_json::Value;

use plugin_sdk::{AgentRuntime, Evaluator, Message, Result};

use crate::cache::CriticismCache;

/// Trigger substrings, checked in order: a message matching the first is
/// never re-checked against the second.
const TRIGGERS: [&str; 2] = ["improve:", "critique:"];

/// Evaluator that captures criticisms or improvement suggestions from
/// conversation and caches them.
pub struct CriticismEvaluator {
    cache: CriticismCache,
}

impl CriticismEvaluator {
    /// Create an evaluator feeding the given cache.
    pub fn new(cache: CriticismCache) -> Self {
        Self { cache }
    }

    /// The cache this evaluator appends to.
    pub fn cache(&self) -> &CriticismCache {
        &self.cache
    }
}

#[async_trait]
impl Evaluator for CriticismEvaluator {
    fn name(&self) -> &str {
        "CriticismEvaluator"
    }

    fn description(&self) -> &str {
        "Captures criticisms or improvement suggestions from conversation and caches them."
    }

    async fn validate(&self, _runtime: &dyn AgentRuntime, _message: &Message) -> bool {
        // Always run; any message is accepted for inspection.
        true
    }

    async fn handler(
        &self,
        _runtime: &dyn AgentRuntime,
        message: &Message,
    ) -> Result<Option<Value>> {
        if let Some(captured) = capture_criticism(&message.text) {
            tracing::debug!(criticism = %captured, "cached criticism from conversation");
            self.cache.push(captured);
        }

        Ok(None)
    }
}

/// Extract the criticism text from a message, if any.
///
/// The trigger match is case-insensitive but the capture preserves the
/// original casing: everything after the first occurrence of the first
/// matching trigger, trimmed. Empty captures are discarded.
fn capture_criticism(text: &str) -> Option<String> {
    for trigger in TRIGGERS {
        if let Some(pos) = find_ignore_ascii_case(text, trigger) {
            let captured = text[pos + trigger.len()..].trim();
            if captured.is_empty() {
                return None;
            }
            return Some(captured.to_string());
        }
    }

    None
}

/// Byte offset of the first case-insensitive occurrence of an ASCII needle.
///
/// Searching bytewise keeps the offset valid in the original text, which a
/// lowercase-then-find round trip would not guarantee for non-ASCII input.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
