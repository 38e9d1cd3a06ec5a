//! # Snapshot — Single-Generation Binding Table
//!
//! One flat mapping from key to [`CellId`]. This is the building block the
//! engines compose: the flat index is a single `Snapshot`, and the chunked
//! index is an ordered sequence of them (one per generation).
//!
//! A snapshot stores handles, never payloads — the owning engine's arena
//! holds the cells. Binding a key that is already bound displaces the old
//! handle within this snapshot only; the displaced cell itself stays alive
//! in the arena and may still be reachable from older generations.

use cell::CellId;
use std::collections::HashMap;
use std::hash::Hash;

/// A flat `key → CellId` binding table.
#[derive(Debug)]
pub struct Snapshot<K> {
    bindings: HashMap<K, CellId>,
}

impl<K: Eq + Hash> Snapshot<K> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key` to `cell`, returning the displaced handle if the key was
    /// already bound. Last binding wins.
    pub fn bind(&mut self, key: K, cell: CellId) -> Option<CellId> {
        self.bindings.insert(key, cell)
    }

    /// Point lookup: the handle currently bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<CellId> {
        self.bindings.get(key).copied()
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    /// Returns the number of distinct keys bound in this snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Eq + Hash> Default for Snapshot<K> {
    fn default() -> Self {
        Self::new()
    }
}
