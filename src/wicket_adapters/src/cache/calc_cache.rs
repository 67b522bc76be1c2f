use std::sync::Arc;

use dashmap::DashMap;

/// Write-once cache for calculation results.
///
/// Each key is bound to the first value inserted for it; later inserts are
/// ignored. Entries are never evicted and live as long as the cache. The map
/// is sharded-lock concurrent, and insert-if-absent is atomic per key, so
/// racing writers agree on a single winner.
#[derive(Debug, Clone, Default)]
pub struct CalcCache {
    entries: Arc<DashMap<String, f64>>,
}

impl CalcCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Bind `key` to `value` unless the key is already bound.
    ///
    /// Returns the value the key is bound to after the call, which is the
    /// existing one whenever the insert lost.
    pub fn insert(&self, key: impl Into<String>, value: f64) -> f64 {
        *self.entries.entry(key.into()).or_insert(value)
    }

    /// Look a cached result up; `None` when the key was never bound.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
