//! Event payload types for all tsalias events.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AliasesLoadedEvent {
    pub config_path: PathBuf,
    pub alias_count: usize,
}

/// Extra target candidates that were dropped in favor of the first one.
#[derive(Debug, Clone)]
pub struct AliasCandidatesIgnoredEvent {
    pub alias: String,
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FileRewrittenEvent {
    pub path: PathBuf,
    /// Path relative to the output root, for display.
    pub relative_path: String,
    pub replacements: usize,
}

#[derive(Debug, Clone)]
pub struct FileUnchangedEvent {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileSkippedEvent {
    pub path: PathBuf,
    pub error_code: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct DirectorySkippedEvent {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub files_skipped: usize,
    pub dirs_skipped: usize,
    pub duration_ms: u64,
}
