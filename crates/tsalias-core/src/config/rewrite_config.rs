//! Rewrite configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the walker and rewriter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RewriteConfig {
    /// Extension of eligible output files, without the dot. Default: `js`.
    pub extension: Option<String>,
    /// Worker threads. 1 streams files sequentially, 0 = one per core. Default: 1.
    pub threads: Option<usize>,
    /// Descend into symlinked directories. Default: false.
    pub follow_links: Option<bool>,
}

impl RewriteConfig {
    /// Returns the effective extension, defaulting to `js`.
    pub fn effective_extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("js")
    }

    /// Returns the effective thread count, defaulting to 1.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(1)
    }

    pub fn effective_follow_links(&self) -> bool {
        self.follow_links.unwrap_or(false)
    }
}
