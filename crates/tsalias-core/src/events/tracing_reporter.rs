//! Event handler that turns events into `tracing` log lines.

use tracing::{debug, info, warn};

use super::handler::RewriteEventHandler;
use super::types::*;

/// The default reporter: an info line per changed file, warnings for
/// anything that was skipped, debug for the rest.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl RewriteEventHandler for TracingReporter {
    fn on_aliases_loaded(&self, event: &AliasesLoadedEvent) {
        debug!(
            config = %event.config_path.display(),
            "Loaded {} path aliases",
            event.alias_count
        );
    }

    fn on_alias_candidates_ignored(&self, event: &AliasCandidatesIgnoredEvent) {
        debug!(
            alias = %event.alias,
            ignored = ?event.ignored,
            "only the first target candidate is used"
        );
    }

    fn on_file_rewritten(&self, event: &FileRewrittenEvent) {
        info!(
            replacements = event.replacements,
            "   Transformed: {}",
            event.relative_path
        );
    }

    fn on_file_skipped(&self, event: &FileSkippedEvent) {
        warn!(code = event.error_code, "   {}", event.reason);
    }

    fn on_directory_skipped(&self, event: &DirectorySkippedEvent) {
        warn!("{}", event.reason);
    }

    fn on_run_complete(&self, event: &RunCompleteEvent) {
        info!(
            scanned = event.files_scanned,
            changed = event.files_changed,
            skipped = event.files_skipped,
            dirs_skipped = event.dirs_skipped,
            duration_ms = event.duration_ms,
            "Path alias transformation completed"
        );
    }
}
