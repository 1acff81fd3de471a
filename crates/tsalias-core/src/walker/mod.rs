//! Walker module - lazy traversal of the compiled output tree
//!
//! Built on `walkdir`: depth-first, sorted by file name, symlink cycles
//! detected when links are followed, unreadable directories reported and
//! skipped.

mod types;
mod traversal;

pub use types::{FileKind, FileNode};
pub use traversal::TreeWalker;
