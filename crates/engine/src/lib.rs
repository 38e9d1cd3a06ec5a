//! # Engine - StrataIndex Versioned Index Engines
//!
//! Three alternative in-memory engines implementing the same abstract
//! contract — "map a key to a value, remembering multiple versions" — with
//! different internal shapes:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        ENGINES                             │
//! │                                                            │
//! │ flat.rs    → one Snapshot            (no history, baseline)│
//! │ chunked.rs → Vec<Snapshot>           (capacity-bounded     │
//! │              newest-first scan        generations)         │
//! │ history.rs → HashMap<K, Vec<CellId>> (per-key version      │
//! │              last-element lookup      lists)               │
//! │                                                            │
//! │ All payloads live in a per-engine CellArena; containers    │
//! │ store CellId handles only.                                 │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module      | Purpose                                              |
//! |-------------|------------------------------------------------------|
//! | [`lib.rs`]  | `VersionIndex` trait, `IndexError`, re-exports       |
//! | [`flat`]    | `FlatIndex`: latest-value-only baseline              |
//! | [`chunked`] | `ChunkedIndex`: generation-batched version retention |
//! | [`history`] | `HistoryIndex`: per-key append-only version lists    |
//!
//! ## Choosing an engine
//!
//! The flat index is the raw-lookup baseline: one map probe, no history.
//! The chunked index retains versions batch-wise; its generation capacity
//! trades lookup fan-out (worst case scans every generation) against the
//! granularity of "as of generation N" queries. The history index retains
//! every version per key with O(1) latest-value lookup and is the shape to
//! prefer when queries skew toward "latest value of a specific key".
//!
//! All engines are single-threaded, own their storage exclusively, and hand
//! out shared references to immutable cells on lookup. Not-found is a
//! normal outcome and is reported as `None`; only caller misuse (a version
//! or generation index beyond the valid span) and invalid construction
//! parameters surface as [`IndexError`].

mod chunked;
mod flat;
mod history;

use std::hash::Hash;
use thiserror::Error;

pub use chunked::ChunkedIndex;
pub use flat::FlatIndex;
pub use history::HistoryIndex;

/// Errors surfaced by the index engines.
///
/// Lookups that simply miss return `None`, not an error; these variants
/// cover contract violations only.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// A version or generation index beyond the valid span.
    #[error("index {index} out of range (valid span is 0..{len})")]
    OutOfRange { index: usize, len: usize },

    /// A non-positive generation capacity supplied at construction.
    #[error("generation capacity must be greater than zero")]
    InvalidCapacity,
}

/// The contract shared by all three engines.
///
/// `insert` always succeeds and records a new immutable cell; how many
/// older cells stay reachable is the engine's defining trade-off.
/// `lookup_latest` returns the cell from the most recent insert for the
/// key, regardless of internal shape.
pub trait VersionIndex<K: Eq + Hash, V> {
    /// Records a new version of `key`.
    fn insert(&mut self, key: K, value: V);

    /// Returns the most recently inserted value for `key`, or `None` if
    /// the key was never inserted.
    fn lookup_latest(&self, key: &K) -> Option<&V>;

    /// Returns the number of inserts whose cells the engine still reaches
    /// through its containers.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
