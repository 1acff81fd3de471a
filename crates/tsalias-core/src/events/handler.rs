//! RewriteEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling tsalias events.
///
/// Handlers override only the events they care about. `Send + Sync` is
/// required because files may be processed on a worker pool.
pub trait RewriteEventHandler: Send + Sync {
    // ---- Configuration ----
    fn on_aliases_loaded(&self, _event: &AliasesLoadedEvent) {}
    fn on_alias_candidates_ignored(&self, _event: &AliasCandidatesIgnoredEvent) {}

    // ---- Per file ----
    fn on_file_rewritten(&self, _event: &FileRewrittenEvent) {}
    fn on_file_unchanged(&self, _event: &FileUnchangedEvent) {}
    fn on_file_skipped(&self, _event: &FileSkippedEvent) {}

    // ---- Traversal ----
    fn on_directory_skipped(&self, _event: &DirectorySkippedEvent) {}

    // ---- Run ----
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
}
