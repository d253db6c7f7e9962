use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use dashmap::DashMap;

pub(crate) type KvMap = DashMap<String, String>;

/// Concurrent in-memory key-value map.
///
/// Reads and writes are atomic per key. Iterating for a snapshot while a
/// writer is applying entries yields a fuzzy view: concurrently written keys
/// may or may not be observed, but no value is ever seen half-written.
///
/// The whole map can be swapped at once, which is how restore installs a
/// fully parsed snapshot.
#[derive(Debug, Default)]
pub struct KvStore {
    data: ArcSwap<KvMap>,
}

impl KvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins
    pub fn insert(
        &self,
        key: String,
        value: String,
    ) {
        self.data.load().insert(key, value);
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<String> {
        self.data.load().get(key).map(|v| v.value().clone())
    }

    pub fn contains_key(
        &self,
        key: &str,
    ) -> bool {
        self.data.load().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the current contents out of the live map
    pub fn to_hash_map(&self) -> HashMap<String, String> {
        self.data
            .load()
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }

    /// The live map, for long-running iteration (snapshot persist).
    pub(crate) fn live(&self) -> Arc<KvMap> {
        self.data.load_full()
    }

    /// Replaces the whole map.
    ///
    /// Callers must guarantee no writer is active: a write racing with the
    /// swap may land in the discarded map.
    pub(crate) fn replace(
        &self,
        data: KvMap,
    ) {
        self.data.store(Arc::new(data));
    }
}
