//! Relative path computation between a target directory and list entries

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::normalize::{anchor, prefix_of};

/// Computes paths relative to one fixed target directory.
///
/// Both the target and every relativized path are anchored to the working
/// directory captured at construction, then normalized lexically. Nothing is
/// looked up on disk.
#[derive(Debug, Clone)]
pub struct Relativizer {
    target: PathBuf,
    cwd: PathBuf,
    base: PathBuf,
}

impl Relativizer {
    pub fn new(target: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let cwd = cwd.into();
        let base = anchor(&target, &cwd);
        Self { target, cwd, base }
    }

    /// Build a relativizer anchored to the process working directory.
    pub fn from_current_dir(target: impl Into<PathBuf>) -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(target, cwd))
    }

    /// Target directory as supplied by the caller.
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Relativize one (already stripped) list line.
    pub fn relativize(&self, line: &str) -> PathBuf {
        self.relativize_path(Path::new(line))
    }

    /// The empty path names the target itself and yields `.`.
    pub fn relativize_path(&self, path: &Path) -> PathBuf {
        if path.as_os_str().is_empty() {
            return PathBuf::from(".");
        }

        let location = anchor(path, &self.cwd);

        if prefix_of(&location) != prefix_of(&self.base) {
            warn!(
                path = %location.display(),
                base = %self.base.display(),
                "path is on a different volume than the target; emitting it unchanged"
            );
            return location;
        }

        match pathdiff::diff_paths(&location, &self.base) {
            Some(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
            Some(rel) => rel,
            None => location,
        }
    }
}

/// Relative path from `target` to `path`, anchoring relative inputs to `cwd`.
pub fn relative_path(path: &Path, target: &Path, cwd: &Path) -> PathBuf {
    Relativizer::new(target, cwd).relativize_path(path)
}
