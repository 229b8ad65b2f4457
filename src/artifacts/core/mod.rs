//! Core utilities and shared types
//!
//! - `fs`: atomic file replacement used by every persisted area
//! - `pager`: `Write` adapter over the minus pager

pub mod fs;
pub mod pager;
