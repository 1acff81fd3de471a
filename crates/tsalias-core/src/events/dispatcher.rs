//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::RewriteEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RewriteEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RewriteEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from receiving the event.
    fn emit<F: Fn(&dyn RewriteEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_aliases_loaded(&self, event: &AliasesLoadedEvent) {
        self.emit(|h| h.on_aliases_loaded(event));
    }

    pub fn emit_alias_candidates_ignored(&self, event: &AliasCandidatesIgnoredEvent) {
        self.emit(|h| h.on_alias_candidates_ignored(event));
    }

    pub fn emit_file_rewritten(&self, event: &FileRewrittenEvent) {
        self.emit(|h| h.on_file_rewritten(event));
    }

    pub fn emit_file_unchanged(&self, event: &FileUnchangedEvent) {
        self.emit(|h| h.on_file_unchanged(event));
    }

    pub fn emit_file_skipped(&self, event: &FileSkippedEvent) {
        self.emit(|h| h.on_file_skipped(event));
    }

    pub fn emit_directory_skipped(&self, event: &DirectorySkippedEvent) {
        self.emit(|h| h.on_directory_skipped(event));
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        self.emit(|h| h.on_run_complete(event));
    }
}
