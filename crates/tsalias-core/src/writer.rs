//! Change writer - persists rewritten files only when their content changed.
//!
//! The output tree is disposable build output, so files are overwritten in
//! place without backups.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{RewriteError, TsaliasErrorCode};
use crate::events::{EventDispatcher, FileRewrittenEvent, FileSkippedEvent, FileUnchangedEvent};
use crate::rewriter::{FileRewrite, RewriteResult};

/// Writes rewritten content back and reports what happened.
#[derive(Debug, Clone)]
pub struct ChangeWriter {
    output_root: PathBuf,
}

impl ChangeWriter {
    /// `output_root` is only used to shorten paths in reports.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Write `rewrite.rewritten` if it differs byte-for-byte from
    /// `rewrite.original`. Returns whether the file was written.
    pub fn commit(&self, rewrite: &FileRewrite, events: &EventDispatcher) -> Result<bool, RewriteError> {
        if rewrite.rewritten.as_bytes() == rewrite.original.as_bytes() {
            events.emit_file_unchanged(&FileUnchangedEvent {
                path: rewrite.path.clone(),
            });
            return Ok(false);
        }

        fs::write(&rewrite.path, rewrite.rewritten.as_bytes()).map_err(|source| {
            RewriteError::Write {
                path: rewrite.path.clone(),
                source,
            }
        })?;

        events.emit_file_rewritten(&FileRewrittenEvent {
            path: rewrite.path.clone(),
            relative_path: self.display_path(&rewrite.path),
            replacements: rewrite.replacements,
        });
        Ok(true)
    }

    /// Turn a per-file outcome into a [`RewriteResult`], reporting skips.
    pub fn settle(
        &self,
        path: &Path,
        outcome: Result<bool, RewriteError>,
        events: &EventDispatcher,
    ) -> RewriteResult {
        match outcome {
            Ok(changed) => RewriteResult::changed(path.to_path_buf(), changed),
            Err(err) => {
                let reason = err.to_string();
                events.emit_file_skipped(&FileSkippedEvent {
                    path: err.path().to_path_buf(),
                    error_code: err.error_code(),
                    reason: reason.clone(),
                });
                RewriteResult::skipped(path.to_path_buf(), reason)
            }
        }
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.output_root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
