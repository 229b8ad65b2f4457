//! Per-file comparison of a commit against its parent
//!
//! - `file_change`: what happened to one file in a commit
//! - `inspector`: resolves a commit's entries against its parent's own entries

pub mod file_change;
pub mod inspector;

pub use file_change::{CommitInspection, FileChange, FileInspection};
pub use inspector::Inspector;
