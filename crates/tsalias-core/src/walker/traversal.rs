//! Output tree walker
//!
//! Enumerates the compiled output lazily so files can be rewritten while the
//! walk is still in progress.

use std::ffi::OsStr;
use std::fs::FileType;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::types::{FileKind, FileNode};
use crate::errors::ScanError;
use crate::events::{DirectorySkippedEvent, EventDispatcher};

/// Walks an output tree and classifies every entry.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    extension: String,
    follow_links: bool,
}

impl TreeWalker {
    /// `extension` is given without the leading dot, e.g. `js`.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            follow_links: false,
        }
    }

    /// Descend into symlinked directories. Cycles are detected and reported.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every entry below the root (the root itself excluded). Entries that
    /// cannot be read are reported to `events` and left out.
    pub fn nodes<'a>(&'a self, events: &'a EventDispatcher) -> impl Iterator<Item = FileNode> + 'a {
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let kind = self.classify(entry.path(), entry.file_type());
                    Some(FileNode {
                        path: entry.into_path(),
                        kind,
                    })
                }
                Err(err) => {
                    report_walk_error(&self.root, &err, events);
                    None
                }
            })
    }

    /// Eligible files only.
    pub fn eligible_files<'a>(
        &'a self,
        events: &'a EventDispatcher,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        self.nodes(events)
            .filter(FileNode::is_eligible)
            .map(|node| node.path)
    }

    fn classify(&self, path: &Path, file_type: FileType) -> FileKind {
        if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_file() && self.has_extension(path) {
            FileKind::Eligible
        } else {
            FileKind::Other
        }
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
    }
}

fn report_walk_error(root: &Path, err: &walkdir::Error, events: &EventDispatcher) {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = match err.loop_ancestor() {
        Some(ancestor) => format!("symlink cycle back to {}", ancestor.display()),
        None => match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        },
    };
    let error = ScanError::DirectoryRead {
        path: path.clone(),
        message,
    };
    events.emit_directory_skipped(&DirectorySkippedEvent {
        path,
        reason: error.to_string(),
    });
}
