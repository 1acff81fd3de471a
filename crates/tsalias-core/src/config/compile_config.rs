//! Compile step configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the compile step that runs before rewriting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompileConfig {
    /// Run the build command before rewriting. Default: true.
    pub enabled: Option<bool>,
    /// Shell command producing the output tree. Default: `npm run build:all`.
    pub command: Option<String>,
}

impl CompileConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_command(&self) -> &str {
        self.command.as_deref().unwrap_or("npm run build:all")
    }
}
