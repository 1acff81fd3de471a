//! Top-level tsalias configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CompileConfig, PathsConfig, RewriteConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "tsalias.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TSALIAS_*`)
/// 3. Project config (`tsalias.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TsaliasConfig {
    pub paths: PathsConfig,
    pub rewrite: RewriteConfig,
    pub compile: CompileConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub build_dir: Option<String>,
    pub tsconfig: Option<String>,
    pub extension: Option<String>,
    pub threads: Option<usize>,
    pub follow_links: Option<bool>,
    pub compile_enabled: Option<bool>,
    pub build_command: Option<String>,
}

impl TsaliasConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TsaliasConfig) -> Result<(), ConfigError> {
        if let Some(ref ext) = config.rewrite.extension {
            if ext.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "rewrite.extension".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if ext.starts_with('.') || ext.contains(|c: char| c == '/' || c == '\\') {
                return Err(ConfigError::ValidationFailed {
                    field: "rewrite.extension".to_string(),
                    message: "must be a bare extension such as `js`".to_string(),
                });
            }
        }
        if let Some(ref dir) = config.paths.build_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "paths.build_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref command) = config.compile.command {
            if command.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "compile.command".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TsaliasConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
            file: PROJECT_CONFIG_FILE.to_string(),
        })?;

        let file_config: TsaliasConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut TsaliasConfig, other: &TsaliasConfig) {
        if other.paths.build_dir.is_some() {
            base.paths.build_dir = other.paths.build_dir.clone();
        }
        if other.paths.tsconfig.is_some() {
            base.paths.tsconfig = other.paths.tsconfig.clone();
        }

        if other.rewrite.extension.is_some() {
            base.rewrite.extension = other.rewrite.extension.clone();
        }
        if other.rewrite.threads.is_some() {
            base.rewrite.threads = other.rewrite.threads;
        }
        if other.rewrite.follow_links.is_some() {
            base.rewrite.follow_links = other.rewrite.follow_links;
        }

        if other.compile.enabled.is_some() {
            base.compile.enabled = other.compile.enabled;
        }
        if other.compile.command.is_some() {
            base.compile.command = other.compile.command.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TSALIAS_BUILD_DIR`, `TSALIAS_THREADS`, etc.
    fn apply_env_overrides(config: &mut TsaliasConfig) {
        if let Ok(val) = std::env::var("TSALIAS_BUILD_DIR") {
            config.paths.build_dir = Some(val);
        }
        if let Ok(val) = std::env::var("TSALIAS_TSCONFIG") {
            config.paths.tsconfig = Some(val);
        }
        if let Ok(val) = std::env::var("TSALIAS_EXTENSION") {
            config.rewrite.extension = Some(val);
        }
        if let Ok(val) = std::env::var("TSALIAS_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.rewrite.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TSALIAS_FOLLOW_LINKS") {
            if let Some(v) = parse_bool(&val) {
                config.rewrite.follow_links = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TSALIAS_COMPILE_ENABLED") {
            if let Some(v) = parse_bool(&val) {
                config.compile.enabled = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TSALIAS_BUILD_COMMAND") {
            config.compile.command = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut TsaliasConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.build_dir {
            config.paths.build_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.tsconfig {
            config.paths.tsconfig = Some(v.clone());
        }
        if let Some(ref v) = cli.extension {
            config.rewrite.extension = Some(v.clone());
        }
        if let Some(v) = cli.threads {
            config.rewrite.threads = Some(v);
        }
        if let Some(v) = cli.follow_links {
            config.rewrite.follow_links = Some(v);
        }
        if let Some(v) = cli.compile_enabled {
            config.compile.enabled = Some(v);
        }
        if let Some(ref v) = cli.build_command {
            config.compile.command = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_merge_keeps_base_when_other_unset() {
        let mut base = TsaliasConfig::from_toml("[paths]\nbuild_dir = \"dist\"").unwrap();
        let other = TsaliasConfig::from_toml("[rewrite]\nthreads = 4").unwrap();
        TsaliasConfig::merge(&mut base, &other);
        assert_eq!(base.paths.effective_build_dir(), "dist");
        assert_eq!(base.rewrite.effective_threads(), 4);
    }
}
