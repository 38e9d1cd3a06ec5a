//! Per-key history index: one append-only version list per key.
//!
//! Every insert is retained. The latest value is the last element of the
//! key's list, so `lookup_latest` costs one map probe plus one index — no
//! scan, regardless of how many versions exist. Memory grows per key
//! instead of per generation.

use cell::{CellArena, CellId};
use std::collections::HashMap;
use std::hash::Hash;

use crate::{IndexError, VersionIndex};

/// A versioned index keeping the full insertion-ordered history per key.
#[derive(Debug)]
pub struct HistoryIndex<K, V> {
    arena: CellArena<V>,
    /// Per-key version lists, insertion-ordered, never reordered or
    /// truncated. A key present in the map always has at least one entry.
    histories: HashMap<K, Vec<CellId>>,
}

impl<K: Eq + Hash, V> HistoryIndex<K, V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            arena: CellArena::new(),
            histories: HashMap::new(),
        }
    }

    /// Appends a new version to `key`'s history, creating the history on
    /// the first insert for that key.
    pub fn insert(&mut self, key: K, value: V) {
        let cell = self.arena.alloc(value);
        self.histories.entry(key).or_default().push(cell);
    }

    /// Returns the most recently inserted value for `key`, or `None` if
    /// the key was never inserted.
    #[must_use]
    pub fn lookup_latest(&self, key: &K) -> Option<&V> {
        self.histories
            .get(key)
            .and_then(|history| history.last())
            .map(|&id| self.arena.resolve(id))
    }

    /// Returns the value at position `version_index` in `key`'s insertion
    /// order.
    ///
    /// A key that was never inserted yields `Ok(None)`; a key that exists
    /// but has fewer versions than `version_index + 1` is caller misuse.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if the key exists and
    /// `version_index` ≥ its history length.
    pub fn lookup_at(&self, key: &K, version_index: usize) -> Result<Option<&V>, IndexError> {
        let Some(history) = self.histories.get(key) else {
            return Ok(None);
        };
        match history.get(version_index) {
            Some(&id) => Ok(Some(self.arena.resolve(id))),
            None => Err(IndexError::OutOfRange {
                index: version_index,
                len: history.len(),
            }),
        }
    }

    /// Returns the number of versions recorded for `key`, 0 if the key was
    /// never inserted.
    #[must_use]
    pub fn history_length(&self, key: &K) -> usize {
        self.histories.get(key).map_or(0, Vec::len)
    }

    /// Returns the number of distinct keys with at least one version.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.histories.len()
    }

    /// Returns the total number of versions across all keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for HistoryIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> VersionIndex<K, V> for HistoryIndex<K, V> {
    fn insert(&mut self, key: K, value: V) {
        HistoryIndex::insert(self, key, value);
    }

    fn lookup_latest(&self, key: &K) -> Option<&V> {
        HistoryIndex::lookup_latest(self, key)
    }

    fn len(&self) -> usize {
        HistoryIndex::len(self)
    }
}
