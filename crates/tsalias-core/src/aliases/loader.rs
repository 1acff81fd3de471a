//! Loads path aliases from the extended compiler configuration.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::jsonc;
use super::types::AliasMapping;
use crate::errors::ConfigError;
use crate::events::{AliasCandidatesIgnoredEvent, AliasesLoadedEvent, EventDispatcher};

/// Reads `compilerOptions.rootDir` and `compilerOptions.paths` from a JSONC
/// compiler config and turns them into an [`AliasMapping`].
#[derive(Debug, Clone)]
pub struct AliasConfigLoader {
    file_name: String,
}

impl AliasConfigLoader {
    /// `file_name` is resolved against the project root passed to [`load`](Self::load).
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Path of the config file under `project_root`.
    pub fn config_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.file_name)
    }

    /// Locate, read and parse the alias configuration.
    pub fn load(
        &self,
        project_root: &Path,
        events: &EventDispatcher,
    ) -> Result<AliasMapping, ConfigError> {
        let path = self.config_path(project_root);
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
                file: self.file_name.clone(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mapping = self.parse(&content, &path, events)?;
        events.emit_aliases_loaded(&AliasesLoadedEvent {
            config_path: path,
            alias_count: mapping.len(),
        });
        Ok(mapping)
    }

    /// Parse already-read config text. `path` is only used in error messages.
    pub fn parse(
        &self,
        content: &str,
        path: &Path,
        events: &EventDispatcher,
    ) -> Result<AliasMapping, ConfigError> {
        let display = path.display().to_string();
        let value = jsonc::parse(content).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let root_dir = compiler_option(&value, "rootDir").and_then(Value::as_str);
        let paths = compiler_option(&value, "paths")
            .and_then(Value::as_object)
            .ok_or_else(|| ConfigError::MissingPaths {
                path: display.clone(),
            })?;

        let mapping = AliasMapping::from_entries(normalize_entries(paths, root_dir, events));
        if mapping.is_empty() {
            return Err(ConfigError::NoAliases { path: display });
        }
        Ok(mapping)
    }
}

/// Look a key up under `compilerOptions`, falling back to the top level.
fn compiler_option<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .get("compilerOptions")
        .and_then(|options| options.get(key))
        .or_else(|| value.get(key))
}

fn normalize_entries(
    paths: &Map<String, Value>,
    root_dir: Option<&str>,
    events: &EventDispatcher,
) -> Vec<(String, String)> {
    let mut entries = Vec::with_capacity(paths.len());

    for (pattern, candidates) in paths {
        let Some(candidates) = candidates.as_array() else {
            continue;
        };
        let Some(first) = candidates.first().and_then(Value::as_str) else {
            continue;
        };
        if candidates.len() > 1 {
            events.emit_alias_candidates_ignored(&AliasCandidatesIgnoredEvent {
                alias: pattern.clone(),
                ignored: candidates[1..]
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect(),
            });
        }

        let alias = strip_wildcard(pattern).trim_end_matches('/');
        if alias.is_empty() {
            continue;
        }
        entries.push((format!("{alias}/"), normalize_target(first, root_dir)));
    }

    entries
}

/// `@lib/*` → `@lib`, `src/*` → `src`.
fn strip_wildcard(pattern: &str) -> &str {
    pattern
        .strip_suffix("/*")
        .or_else(|| pattern.strip_suffix('*'))
        .unwrap_or(pattern)
}

/// Turn a target pattern into a `./`-relative, `/`-terminated directory,
/// collapsing `root_dir` the way the compiler does in its output.
pub(crate) fn normalize_target(target: &str, root_dir: Option<&str>) -> String {
    let mut target = strip_dot_slash(strip_wildcard(target).trim_end_matches('/'));

    if let Some(root) = root_dir {
        let root = strip_dot_slash(root.trim_end_matches('/'));
        if !root.is_empty() && root != "." {
            if target == root {
                target = "";
            } else if let Some(rest) = target
                .strip_prefix(root)
                .and_then(|rest| rest.strip_prefix('/'))
            {
                target = rest;
            }
        }
    }

    if target.is_empty() || target == "." {
        "./".to_string()
    } else {
        format!("./{target}/")
    }
}

fn strip_dot_slash(mut s: &str) -> &str {
    while let Some(rest) = s.strip_prefix("./") {
        s = rest;
    }
    s
}
