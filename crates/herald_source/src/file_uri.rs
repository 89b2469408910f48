//! Opaque identifiers for files and directories reported by the analysis host.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Opaque identifier for a file or directory known to the analysis host.
///
/// A `FileUri` wraps the host-supplied path and is compared by value, so it
/// can serve as a mapping key when snapshots are diffed or when rendered
/// diagnostics are grouped by file.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileUri(PathBuf);

impl FileUri {
    /// Creates a `FileUri` from a host-supplied path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Renders this URI relative to `cwd`, joined with forward slashes
    /// regardless of platform.
    ///
    /// Paths outside `cwd` are reached through `..` components, matching the
    /// relative form a user would type in a shell.
    pub fn display_relative(&self, cwd: &Path) -> String {
        let rel = relative_to(cwd, &self.0);
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.join("/")
    }
}

impl From<&str> for FileUri {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for FileUri {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Computes the path of `target` relative to `base`.
///
/// Walks both paths component-wise past their common prefix, then joins one
/// `..` per remaining `base` component followed by the remaining `target`
/// components. Identical paths produce an empty result.
fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base_parts: Vec<Component> = base.components().collect();
    let target_parts: Vec<Component> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &target_parts[common..] {
        rel.push(part);
    }
    rel
}
