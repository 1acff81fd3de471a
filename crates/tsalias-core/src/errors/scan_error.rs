//! Output tree traversal errors.

use std::path::PathBuf;

use super::error_code::{self, TsaliasErrorCode};

/// A directory entry that could not be enumerated. Never fatal: the walker
/// reports it and moves on to the remaining siblings.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to process directory {}: {message}", path.display())]
    DirectoryRead { path: PathBuf, message: String },
}

impl TsaliasErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::DIRECTORY_READ_ERROR
    }
}
