// sentience-rs/src/cache.rs
// Shared criticism accumulator.
//
// The cache is an ordered, append-only list with process lifetime. It is
// owned by the plugin instance and handed to the components that need it as
// a cheap cloneable handle. Appends from concurrently running evaluator
// invocations remain append-atomic behind the mutex.

use std::sync::{Arc, Mutex};

/// Cloneable handle over the shared criticism list.
#[derive(Clone, Default)]
pub struct CriticismCache {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CriticismCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a criticism. Entries are kept in arrival order; there is no
    /// cap and no deduplication.
    pub fn push(&self, criticism: impl Into<String>) {
        self.entries.lock().unwrap().push(criticism.into());
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Copy of the cached entries, in arrival order. The cache itself is
    /// left untouched.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Take all cached entries, leaving the cache empty. Use this for
    /// accumulate-then-reset flows.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.entries.lock().unwrap())
    }

    /// Discard all cached entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
