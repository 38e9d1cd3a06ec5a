//! Chunked version index: capacity-bounded generations, newest-first scan.
//!
//! Inserts accumulate into the open generation; once it holds `capacity`
//! bindings the next insert opens a fresh one (seal-then-insert), leaving
//! the old generation immutable. Lookups scan generations newest-first and
//! stop at the first hit, so the worst-case fan-out for a miss is
//! `total_inserts / capacity` point probes.

use cell::CellArena;
use snapshot::Snapshot;
use std::hash::Hash;

use crate::{IndexError, VersionIndex};

/// A versioned index batching inserts into fixed-capacity generations.
///
/// # Insert Path
///
/// 1. If no generation exists, or the open one already holds `capacity`
///    bindings, push a fresh empty generation (the old one is sealed by
///    never being written again).
/// 2. Allocate a cell for the value and bind it in the open generation.
///    Re-inserting a key within one generation displaces that generation's
///    binding only; bindings in sealed generations are untouched.
///
/// # Lookup Path
///
/// Generations are probed newest-first and the first hit wins, so the most
/// recent binding for a key always shadows older ones. `lookup_as_of`
/// applies the same rule to the prefix of generations up to a bound.
#[derive(Debug)]
pub struct ChunkedIndex<K, V> {
    arena: CellArena<V>,
    /// Generations in creation order; only the last may still accept
    /// bindings.
    generations: Vec<Snapshot<K>>,
    capacity: usize,
}

impl<K: Eq + Hash, V> ChunkedIndex<K, V> {
    /// Creates an empty index with the given generation capacity.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCapacity`] if `capacity` is zero. The
    /// capacity is fixed for the engine's lifetime; construction is the
    /// only place it can fail.
    pub fn new(capacity: usize) -> Result<Self, IndexError> {
        if capacity == 0 {
            return Err(IndexError::InvalidCapacity);
        }
        Ok(Self {
            arena: CellArena::new(),
            generations: Vec::new(),
            capacity,
        })
    }

    /// Inserts a new value for `key` into the open generation, opening a
    /// fresh one first if the current is full (or none exists yet).
    pub fn insert(&mut self, key: K, value: V) {
        let needs_new = match self.generations.last() {
            Some(open) => open.len() >= self.capacity,
            None => true,
        };
        if needs_new {
            self.generations.push(Snapshot::new());
        }

        let cell = self.arena.alloc(value);
        // A generation was just pushed if none existed.
        self.generations.last_mut().unwrap().bind(key, cell);
    }

    /// Returns the most recently inserted value for `key`.
    ///
    /// Scans generations newest-first; the first generation containing the
    /// key supplies the answer.
    #[must_use]
    pub fn lookup_latest(&self, key: &K) -> Option<&V> {
        for generation in self.generations.iter().rev() {
            if let Some(id) = generation.get(key) {
                return Some(self.arena.resolve(id));
            }
        }
        None
    }

    /// Returns the value for `key` as of generation `generation_index`,
    /// scanning only generations with index ≤ the bound, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `generation_index` is not a
    /// valid generation index for this engine.
    pub fn lookup_as_of(
        &self,
        key: &K,
        generation_index: usize,
    ) -> Result<Option<&V>, IndexError> {
        if generation_index >= self.generations.len() {
            return Err(IndexError::OutOfRange {
                index: generation_index,
                len: self.generations.len(),
            });
        }
        for generation in self.generations[..=generation_index].iter().rev() {
            if let Some(id) = generation.get(key) {
                return Ok(Some(self.arena.resolve(id)));
            }
        }
        Ok(None)
    }

    /// Returns the number of generations, the open one included.
    #[must_use]
    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    /// Returns the generation capacity supplied at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the total number of bindings across all generations.
    ///
    /// Re-inserting a key within one generation displaces the old binding,
    /// so this can be less than the number of inserts performed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generations.iter().map(Snapshot::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}

impl<K: Eq + Hash, V> VersionIndex<K, V> for ChunkedIndex<K, V> {
    fn insert(&mut self, key: K, value: V) {
        ChunkedIndex::insert(self, key, value);
    }

    fn lookup_latest(&self, key: &K) -> Option<&V> {
        ChunkedIndex::lookup_latest(self, key)
    }

    fn len(&self) -> usize {
        ChunkedIndex::len(self)
    }
}
