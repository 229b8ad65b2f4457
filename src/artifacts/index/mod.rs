//! Staged entry types
//!
//! The staging index is an ordered list of `(path, digest)` pairs. The same
//! path may appear more than once; readers resolve it with the last match.
//!
//! ## File Format
//!
//! ```text
//! [{"path":"a.txt","digest":"<40 hex>"}, ...]
//! ```
//!
//! An empty index is written as `[]`.

pub mod index_entry;

pub use index_entry::{EntryLookup, IndexEntry};

/// Serialized form of an index with no entries
pub const EMPTY_INDEX: &str = "[]";
