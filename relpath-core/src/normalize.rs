//! Lexical path normalization (no filesystem access, no symlink resolution)

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Anchor `path` to `cwd` unless it is already rooted, then resolve `.` and
/// `..` lexically.
///
/// `..` directly under the root is dropped. The empty path stands for `cwd`
/// itself. On Windows a path with a root but no drive (`\dir`) keeps the
/// drive of `cwd`, which is what `Path::join` does for us.
pub fn anchor(path: &Path, cwd: &Path) -> PathBuf {
    cwd.join(path).clean()
}

/// Drive or UNC prefix of `path` (always `None` on Unix).
pub(crate) fn prefix_of(path: &Path) -> Option<Component<'_>> {
    match path.components().next() {
        Some(prefix @ Component::Prefix(_)) => Some(prefix),
        _ => None,
    }
}
