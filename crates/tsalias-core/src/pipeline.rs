//! Build hook pipeline: compile, load aliases, walk, rewrite, write.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aliases::AliasConfigLoader;
use crate::compiler::BuildCompiler;
use crate::config::TsaliasConfig;
use crate::errors::PipelineError;
use crate::events::{
    DirectorySkippedEvent, EventDispatcher, RewriteEventHandler, RunCompleteEvent, TracingReporter,
};
use crate::rewriter::{AliasRewriter, RewriteResult};
use crate::walker::TreeWalker;
use crate::writer::ChangeWriter;

/// Totals for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Output tree that was processed
    pub output_root: String,
    /// Number of aliases loaded
    pub aliases: usize,
    /// Eligible files visited
    pub files_scanned: usize,
    /// Files written back
    pub files_changed: usize,
    /// Files that could not be read or written
    pub files_skipped: usize,
    /// Directories that could not be enumerated
    pub dirs_skipped: usize,
    /// Changed files, relative to the output root
    pub changed_files: Vec<String>,
    pub duration_ms: u64,
}

/// Counts traversal failures for the summary.
#[derive(Debug, Default)]
struct RunTally {
    dirs_skipped: AtomicUsize,
}

impl RewriteEventHandler for RunTally {
    fn on_directory_skipped(&self, _event: &DirectorySkippedEvent) {
        self.dirs_skipped.fetch_add(1, Ordering::Relaxed);
    }
}

/// The pre-build hook: everything between "sources changed" and "output
/// tree is safe to bundle".
pub struct BuildHook {
    config: TsaliasConfig,
    events: EventDispatcher,
}

impl BuildHook {
    pub fn new(config: TsaliasConfig, events: EventDispatcher) -> Self {
        Self { config, events }
    }

    /// A hook that reports through `tracing`.
    pub fn with_tracing(config: TsaliasConfig) -> Self {
        let mut events = EventDispatcher::new();
        events.register(Arc::new(TracingReporter));
        Self::new(config, events)
    }

    pub fn config(&self) -> &TsaliasConfig {
        &self.config
    }

    /// Compile (when enabled), then rewrite aliases in the output tree.
    pub fn run(&self, project_root: &Path) -> Result<RunSummary, PipelineError> {
        let project_root = absolute(project_root);
        if self.config.compile.effective_enabled() {
            BuildCompiler::new(self.config.compile.effective_command()).compile(&project_root)?;
        }
        self.transform(&project_root)
    }

    /// Rewrite aliases in an existing output tree. Fatal preconditions are
    /// checked before any file is touched.
    pub fn transform(&self, project_root: &Path) -> Result<RunSummary, PipelineError> {
        let start = Instant::now();
        debug!("Starting path alias transformation...");

        let project_root = absolute(project_root);
        let output_root = project_root.join(self.config.paths.effective_build_dir());
        if !output_root.is_dir() {
            return Err(PipelineError::TreeNotFound {
                path: output_root.display().to_string(),
            });
        }

        let loader = AliasConfigLoader::new(self.config.paths.effective_tsconfig());
        let mapping = loader.load(&project_root, &self.events)?;
        let alias_count = mapping.len();
        let rewriter = AliasRewriter::new(mapping, &output_root)?;
        let writer = ChangeWriter::new(&output_root);

        let tally = Arc::new(RunTally::default());
        let mut events = self.events.clone();
        events.register(tally.clone());

        let walker = TreeWalker::new(&output_root, self.config.rewrite.effective_extension())
            .follow_links(self.config.rewrite.effective_follow_links());

        let results = match self.config.rewrite.effective_threads() {
            1 => walker
                .eligible_files(&events)
                .map(|path| process_file(&rewriter, &writer, &path, &events))
                .collect::<Vec<_>>(),
            threads => {
                let files: Vec<PathBuf> = walker.eligible_files(&events).collect();
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;
                pool.install(|| {
                    files
                        .par_iter()
                        .map(|path| process_file(&rewriter, &writer, path, &events))
                        .collect::<Vec<_>>()
                })
            }
        };

        let mut changed_files: Vec<String> = results
            .iter()
            .filter(|r| r.changed)
            .map(|r| display_relative(&output_root, &r.path))
            .collect();
        changed_files.sort();

        let summary = RunSummary {
            output_root: output_root.display().to_string(),
            aliases: alias_count,
            files_scanned: results.len(),
            files_changed: changed_files.len(),
            files_skipped: results.iter().filter(|r| r.is_skipped()).count(),
            dirs_skipped: tally.dirs_skipped.load(Ordering::Relaxed),
            changed_files,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        events.emit_run_complete(&RunCompleteEvent {
            files_scanned: summary.files_scanned,
            files_changed: summary.files_changed,
            files_skipped: summary.files_skipped,
            dirs_skipped: summary.dirs_skipped,
            duration_ms: summary.duration_ms,
        });

        Ok(summary)
    }
}

/// Rewrite and persist one file. Failures are reported and turned into a
/// skipped result; they never abort the run.
pub fn process_file(
    rewriter: &AliasRewriter,
    writer: &ChangeWriter,
    path: &Path,
    events: &EventDispatcher,
) -> RewriteResult {
    let outcome = rewriter
        .rewrite_file(path)
        .and_then(|rewrite| writer.commit(&rewrite, events));
    writer.settle(path, outcome, events)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
