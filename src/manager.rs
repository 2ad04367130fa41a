//! Package manager detection
//!
//! Walks from a working directory up to the filesystem root looking for
//! files that only exist in yarn projects. Nothing found means npm.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marker files and directories that identify a yarn project
pub const DEFAULT_MARKERS: &[&str] = &["yarn.lock", ".yarnrc", ".yarnrc.yml"];

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// npm, used when no yarn marker is found
    Npm,
    /// Yarn
    Yarn,
}

impl PackageManager {
    /// Default executable name for this package manager
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Whether `config get` wraps string values in double quotes
    pub fn strips_quotes(&self) -> bool {
        matches!(self, Self::Yarn)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Make a project directory absolute so its ancestors reach the root
///
/// Symlinks are resolved when the directory exists; otherwise the path is
/// joined onto the current directory, or returned unchanged if even that fails.
pub fn absolute_dir(dir: &Path) -> PathBuf {
    fs::canonicalize(dir)
        .or_else(|_| std::path::absolute(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}

/// Detect the package manager for a project directory
///
/// Probes `start_dir` and each of its ancestors, root included, for any of
/// `markers`. A marker may be a file or a directory. Errors while probing
/// count as the marker being absent. Relative paths are made absolute first.
pub fn detect_package_manager<S: AsRef<str>>(start_dir: &Path, markers: &[S]) -> PackageManager {
    let start_dir = absolute_dir(start_dir);
    for dir in start_dir.ancestors() {
        for marker in markers {
            let candidate = dir.join(marker.as_ref());
            if fs::symlink_metadata(&candidate).is_ok() {
                debug!("Found yarn marker: {}", candidate.display());
                return PackageManager::Yarn;
            }
        }
    }

    debug!("No yarn marker above {}, using npm", start_dir.display());
    PackageManager::Npm
}
