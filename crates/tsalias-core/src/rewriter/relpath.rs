//! Lexical path math for import specifiers.
//!
//! Nothing here touches the filesystem: the targets of rewritten imports do
//! not need to exist, and symlinks in the output tree must not change the
//! specifier that gets written.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without consulting the filesystem.
/// A `..` that would climb above the root is dropped; leading `..` of a
/// relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Path from directory `from_dir` to `to`, joined with `/` on every host.
///
/// Both paths are normalized first. Returns an empty string when they are
/// the same location. If they live under different roots (e.g. different
/// Windows drives) no relative path exists and `to` is returned as-is.
pub fn relative_path(from_dir: &Path, to: &Path) -> String {
    let from = normalize(from_dir);
    let to = normalize(to);

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let (from_anchor, to_anchor) = (anchor_len(&from_parts), anchor_len(&to_parts));
    if from_parts[..from_anchor] != to_parts[..to_anchor] {
        return to.to_string_lossy().replace('\\', "/");
    }

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..from_parts.len() {
        segments.push("..".to_string());
    }
    for part in &to_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }
    segments.join("/")
}

/// Number of leading prefix/root components.
fn anchor_len(parts: &[Component<'_>]) -> usize {
    parts
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count()
}
