//! Attribute overlay ("decorator")
//!
//! Attaches scratch metadata to entities without touching the entities
//! themselves. Keys are stable identities (`VertexId`, `EdgeId`), so a
//! decoration stays valid for as long as the overlay lives, independent of
//! the graph's own borrows. All operations are O(1) expected.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Key → value overlay
#[derive(Debug, Clone)]
pub struct Decorator<K, V> {
    decorations: FxHashMap<K, V>,
}

impl<K: Hash + Eq, V> Decorator<K, V> {
    pub fn new() -> Self {
        Self {
            decorations: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut decorations = FxHashMap::default();
        decorations.reserve(capacity);
        Self { decorations }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.decorations.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.decorations.get_mut(key)
    }

    /// Set the decoration for `key`, returning the one it replaced
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.decorations.insert(key, value)
    }

    pub fn has(&self, key: &K) -> bool {
        self.decorations.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.decorations.remove(key)
    }

    /// Current key set (no ordering guarantee)
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.decorations.keys()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn clear(&mut self) {
        self.decorations.clear();
    }
}

impl<K: Hash + Eq, V> Default for Decorator<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
