//! Repository data types and algorithms
//!
//! - `core`: shared file helpers and the pager writer
//! - `diff`: line diff engine (Myers' algorithm) and hunks
//! - `index`: staged entries and last-match-wins lookup
//! - `inspect`: per-file comparison of a commit against its parent
//! - `log`: commit history traversal
//! - `objects`: digests, blobs and commit records

pub mod core;
pub mod diff;
pub mod index;
pub mod inspect;
pub mod log;
pub mod objects;
