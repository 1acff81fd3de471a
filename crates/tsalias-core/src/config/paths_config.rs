//! Project path configuration.

use serde::{Deserialize, Serialize};

/// Where the compiled output and the alias configuration live, relative to
/// the project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Compiled output directory. Default: `build`.
    pub build_dir: Option<String>,
    /// Compiler configuration declaring `paths`. Default: `tsconfig.extended.json`.
    pub tsconfig: Option<String>,
}

impl PathsConfig {
    pub fn effective_build_dir(&self) -> &str {
        self.build_dir.as_deref().unwrap_or("build")
    }

    pub fn effective_tsconfig(&self) -> &str {
        self.tsconfig.as_deref().unwrap_or("tsconfig.extended.json")
    }
}
