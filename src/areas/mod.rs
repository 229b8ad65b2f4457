//! Persistent repository areas
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staging list persisted as JSON, guarded by `index.lock`
//! - `refs`: HEAD and the commit journal
//! - `commit_graph`: commit creation, loading and history walks
//! - `repository`: the handle tying the areas to one repository root
//! - `workspace`: reading the files that get staged

pub mod commit_graph;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
