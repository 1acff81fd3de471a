//! Walker types - entries visited during traversal

use std::path::PathBuf;

/// What the walker decided about a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    /// Regular file with the recognized output extension.
    Eligible,
    /// Anything else: other extensions, unfollowed symlinks, sockets, ...
    Other,
}

/// A filesystem entry discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl FileNode {
    pub fn is_eligible(&self) -> bool {
        self.kind == FileKind::Eligible
    }
}
