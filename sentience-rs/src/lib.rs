// sentience-rs/src/lib.rs
// Library interface for the Sentience plugin.
//
// The plugin lets the agent rewrite configured files based on "criticisms"
// collected from conversation: an evaluator scans every incoming message for
// improvement suggestions and caches them, and a service appends the cached
// suggestions to the configured files on demand.
//
// Design notes:
// - This crate is a pure library crate; there is no HTTP server or
//   standalone binary entrypoint.
// - The rewrite path is conservative: it only appends criticisms as comment
//   lines and never interprets, merges or version-controls file content.
// - The criticism cache is owned by the plugin instance (not a module-level
//   global) and exposes drain/clear so hosts can opt into
//   accumulate-then-reset semantics; rewriting alone never resets it.

use std::sync::Arc;

use plugin_sdk::Plugin;

mod cache;
mod config;
mod evaluator;
mod rewriter;


pub use crate::cache::CriticismCache;
pub use crate::config::{FILE_PATHS_SETTING, SentienceConfig};
pub use crate::evaluator::CriticismEvaluator;
pub use crate::rewriter::SelfImprovementService;

/// Construct the Sentience plugin registration bundle.
///
/// One [`CriticismCache`] is shared between the evaluator that fills it and
/// the service that reads it; the returned [`Plugin`] carries both.
pub fn plugin() -> Plugin {
    let cache = CriticismCache::new();

    Plugin {
        name: "sentience",
        description: "Experimental plugin letting the agent rewrite specified files based on criticisms or improvement suggestions.",
        services: vec![Arc::new(SelfImprovementService::new(cache.clone()))],
        actions: vec![],
        evaluators: vec![Arc::new(CriticismEvaluator::new(cache))],
    }
}
