//! Per-file rewrite errors.

use std::path::PathBuf;

use super::error_code::{self, TsaliasErrorCode};

/// A single file could not be read or written back. The file is skipped and
/// the run continues.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RewriteError {
    /// The file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

impl TsaliasErrorCode for RewriteError {
    fn error_code(&self) -> &'static str {
        error_code::FILE_IO_ERROR
    }
}
