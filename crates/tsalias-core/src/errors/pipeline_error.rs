//! Fatal pipeline errors.

use super::error_code::{self, TsaliasErrorCode};
use super::{CompileError, ConfigError};

/// Errors that stop the build hook. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Build directory not found at {path}. Run TypeScript compilation first")]
    TreeNotFound { path: String },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl TsaliasErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Compile(e) => e.error_code(),
            Self::TreeNotFound { .. } => error_code::TREE_NOT_FOUND,
            Self::ThreadPool(_) => error_code::PIPELINE_ERROR,
        }
    }
}
