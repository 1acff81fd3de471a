//! Configuration errors.

use super::error_code::{self, TsaliasErrorCode};

/// Errors that can occur while loading `tsalias.toml` or the alias
/// configuration. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}. Path aliases require a valid {file} file")]
    FileNotFound { path: String, file: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("No paths section found in {path}. Path aliases require a paths configuration")]
    MissingPaths { path: String },

    #[error("No valid path aliases found in {path}. At least one path mapping is required")]
    NoAliases { path: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl TsaliasErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
