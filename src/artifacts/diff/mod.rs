//! Line diff engine
//!
//! - `diff_algorithm`: Myers' shortest edit script over any `Eq` sequence
//! - `hunk`: line splitting and grouping of edits into equal/added/removed runs
//!
//! The engine knows nothing about files, digests or commits.

pub mod diff_algorithm;
pub mod hunk;

pub use hunk::{Hunk, HunkKind, diff_lines};
