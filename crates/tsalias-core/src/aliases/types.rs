//! AliasMapping: normalized alias prefix to target directory.

use std::fmt;

/// Alias prefix → `./`-relative target directory, both `/`-terminated.
///
/// Entries are kept longest-key-first (ties broken lexicographically) so a
/// prefix that is itself a prefix of another alias never wins over it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasMapping {
    entries: Vec<(String, String)>,
}

impl AliasMapping {
    /// Build a mapping from normalized `(alias, target)` pairs.
    /// A later duplicate alias replaces an earlier one; the loader feeds
    /// entries in the order they appear in the config file.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut out: Vec<(String, String)> = Vec::new();
        for (alias, target) in entries {
            debug_assert!(alias.ends_with('/'));
            debug_assert!(target.starts_with("./") && target.ends_with('/'));
            match out.iter_mut().find(|(a, _)| *a == alias) {
                Some(slot) => slot.1 = target,
                None => out.push((alias, target)),
            }
        }
        out.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self { entries: out }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target directory for an exact alias key.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, t)| t.as_str())
    }

    /// Entries in match-priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }
}

impl fmt::Display for AliasMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(a, t)| format!("{a} -> {t}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
