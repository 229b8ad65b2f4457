//! Commit history traversal
//!
//! - `rev_list`: newest-to-oldest walk along parent links

pub mod rev_list;
