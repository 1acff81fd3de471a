//! Compile step errors.

use super::error_code::{self, TsaliasErrorCode};

/// Errors raised while validating the project or running the build command.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("package.json not found in {path}. Make sure you're in the project root directory")]
    ProjectRootInvalid { path: String },

    #[error("Build script not found in package.json. Expected: {command}")]
    ScriptNotFound { command: String },

    #[error("Invalid package.json at {path}: {message}")]
    InvalidPackageJson { path: String, message: String },

    #[error("Build command `{command}` failed with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Failed to spawn build command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

impl TsaliasErrorCode for CompileError {
    fn error_code(&self) -> &'static str {
        error_code::COMPILE_ERROR
    }
}
