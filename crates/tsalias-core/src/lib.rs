//! tsalias-core: path alias rewriting for compiled build output
//!
//! This crate provides the components of the pre-build hook:
//! - Aliases: tolerant compiler-config reading and alias normalization
//! - Walker: lazy traversal of the output tree
//! - Rewriter: aliased specifier → relative specifier
//! - Writer: change-only persistence
//! - Compiler: project validation and the build command
//! - Pipeline: the hook tying them together
//! - Config, Errors, Events, Tracing: ambient plumbing

pub mod aliases;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod events;
pub mod pipeline;
pub mod rewriter;
pub mod tracing;
pub mod walker;
pub mod writer;

// Re-exports for convenience
pub use aliases::{AliasConfigLoader, AliasMapping};
pub use compiler::BuildCompiler;
pub use config::{CliOverrides, TsaliasConfig};
pub use errors::{
    CompileError, ConfigError, PipelineError, RewriteError, ScanError, TsaliasErrorCode,
};
pub use events::{EventDispatcher, RewriteEventHandler, TracingReporter};
pub use pipeline::{process_file, BuildHook, RunSummary};
pub use rewriter::{AliasRewriter, RewriteResult};
pub use walker::{FileKind, FileNode, TreeWalker};
pub use writer::ChangeWriter;
