//! Alias rewriter - turns aliased import specifiers into relative ones
//!
//! Every quoted literal that starts with an alias prefix is replaced by a
//! path relative to the importing file's directory. A single regex matches
//! all aliases at once, alternated longest-first, so the leftmost-first
//! semantics of `regex` always pick the longest prefix and a rewritten
//! literal is never matched a second time in the same pass.

pub mod relpath;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use regex::{Captures, Regex};

use crate::aliases::AliasMapping;
use crate::errors::{ConfigError, RewriteError};

/// Result of rewriting one file's content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    pub replacements: usize,
    changed: bool,
}

impl Rewrite<'_> {
    /// True when the rewritten text differs from the input.
    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

/// A file read from disk together with its rewritten content.
#[derive(Debug, Clone)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub original: String,
    pub rewritten: String,
    pub replacements: usize,
}

/// Per-file outcome, used for reporting only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub path: PathBuf,
    pub changed: bool,
    pub skipped_reason: Option<String>,
}

impl RewriteResult {
    pub fn changed(path: PathBuf, changed: bool) -> Self {
        Self {
            path,
            changed,
            skipped_reason: None,
        }
    }

    pub fn skipped(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            changed: false,
            skipped_reason: Some(reason.into()),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped_reason.is_some()
    }
}

/// Rewrites aliased specifiers for files below one output root.
#[derive(Debug, Clone)]
pub struct AliasRewriter {
    mapping: AliasMapping,
    output_root: PathBuf,
    pattern: Regex,
}

impl AliasRewriter {
    /// Compile the matcher for `mapping`. `output_root` should be the same
    /// base the file paths passed to [`rewrite_file`](Self::rewrite_file) use.
    pub fn new(mapping: AliasMapping, output_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        if mapping.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "paths".to_string(),
                message: "at least one alias is required".to_string(),
            });
        }
        let alternation = mapping
            .iter()
            .map(|(alias, _)| regex::escape(alias))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r#"'({alternation})([^'"]*)'|"({alternation})([^'"]*)""#);
        let pattern = Regex::new(&source).map_err(|e| ConfigError::ValidationFailed {
            field: "paths".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            mapping,
            output_root: output_root.into(),
            pattern,
        })
    }

    pub fn mapping(&self) -> &AliasMapping {
        &self.mapping
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Rewrite `content` as if it were the file at `file_path`.
    pub fn rewrite_content<'a>(&self, file_path: &Path, content: &'a str) -> Rewrite<'a> {
        let file_dir = file_path.parent().unwrap_or(&self.output_root);
        let mut replacements = 0usize;

        let rewritten = self.pattern.replace_all(content, |caps: &Captures<'_>| {
            let (quote, alias, rest) = match (caps.get(1), caps.get(2)) {
                (Some(alias), Some(rest)) => ('\'', alias.as_str(), rest.as_str()),
                _ => ('"', &caps[3], &caps[4]),
            };
            match self.mapping.get(alias) {
                Some(target) => {
                    replacements += 1;
                    let specifier = self.specifier_for(file_dir, target, rest);
                    format!("{quote}{specifier}{quote}")
                }
                None => caps[0].to_string(),
            }
        });

        let changed = matches!(&rewritten, Cow::Owned(s) if s != content);
        Rewrite {
            content: rewritten,
            replacements,
            changed,
        }
    }

    /// Read `path` and compute its rewritten content. Nothing is written.
    pub fn rewrite_file(&self, path: &Path) -> Result<FileRewrite, RewriteError> {
        let original = std::fs::read_to_string(path).map_err(|source| RewriteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rewrite = self.rewrite_content(path, &original);
        let replacements = rewrite.replacements;
        let rewritten = rewrite.content.into_owned();

        Ok(FileRewrite {
            path: path.to_path_buf(),
            original,
            rewritten,
            replacements,
        })
    }

    /// Specifier pointing from `file_dir` at `<output_root>/<target>/<rest>`.
    /// Always starts with `./` or `../`.
    pub fn specifier_for(&self, file_dir: &Path, target: &str, rest: &str) -> String {
        let absolute = relpath::normalize(&self.output_root.join(target).join(rest));
        let relative = relpath::relative_path(file_dir, &absolute);
        if relative.starts_with("../") {
            relative
        } else {
            format!("./{relative}")
        }
    }
}
