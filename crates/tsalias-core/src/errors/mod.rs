//! Error handling for tsalias.
//! One error enum per subsystem, `thiserror` only.

pub mod compile_error;
pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod rewrite_error;
pub mod scan_error;

pub use compile_error::CompileError;
pub use config_error::ConfigError;
pub use error_code::TsaliasErrorCode;
pub use pipeline_error::PipelineError;
pub use rewrite_error::RewriteError;
pub use scan_error::ScanError;
