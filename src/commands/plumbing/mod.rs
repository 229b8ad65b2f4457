//! Plumbing commands
//!
//! - `hash-object`: compute a file's digest and optionally store it
//! - `cat-file`: print the stored bytes of an object

pub mod cat_file;
pub mod hash_object;
