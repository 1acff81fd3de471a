//! TsaliasErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so the build pipeline can tell failure
/// classes apart without matching on message text.
pub trait TsaliasErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TREE_NOT_FOUND: &str = "TREE_NOT_FOUND";
pub const DIRECTORY_READ_ERROR: &str = "DIRECTORY_READ_ERROR";
pub const FILE_IO_ERROR: &str = "FILE_IO_ERROR";
pub const COMPILE_ERROR: &str = "COMPILE_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
