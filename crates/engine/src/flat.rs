//! Flat snapshot index: one binding table, latest value only.
//!
//! The baseline for raw lookup cost. Each insert allocates a fresh cell and
//! rebinds the key, so the map never holds more than one handle per key;
//! prior cells stay alive in the arena but are no longer reachable through
//! the index.

use cell::CellArena;
use snapshot::Snapshot;
use std::hash::Hash;

use crate::VersionIndex;

/// A latest-value-only index backed by a single [`Snapshot`].
#[derive(Debug)]
pub struct FlatIndex<K, V> {
    arena: CellArena<V>,
    current: Snapshot<K>,
}

impl<K: Eq + Hash, V> FlatIndex<K, V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            arena: CellArena::new(),
            current: Snapshot::new(),
        }
    }

    /// Inserts a new value for `key`, overwriting any prior binding.
    pub fn insert(&mut self, key: K, value: V) {
        let cell = self.arena.alloc(value);
        self.current.bind(key, cell);
    }

    /// Returns the value currently bound to `key`, or `None`.
    #[must_use]
    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.current.get(key).map(|id| self.arena.resolve(id))
    }

    /// Returns the number of distinct keys bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for FlatIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> VersionIndex<K, V> for FlatIndex<K, V> {
    fn insert(&mut self, key: K, value: V) {
        FlatIndex::insert(self, key, value);
    }

    fn lookup_latest(&self, key: &K) -> Option<&V> {
        self.lookup(key)
    }

    fn len(&self) -> usize {
        FlatIndex::len(self)
    }
}
