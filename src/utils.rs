//! Path utilities for fspick.
//!
//! Small helpers shared by the prompt core and the binary: resolving the
//! configured base path to an absolute form and finding the filesystem root
//! that stops upward navigation.

use std::io;
use std::path::{Path, PathBuf};

/// Resolves `path` to an absolute path without touching the filesystem.
///
/// Relative paths are anchored at the current working directory, mirroring how
/// shells interpret a bare argument. Symlinks are deliberately not resolved:
/// the user selected a path, not its target.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Returns the filesystem root of an absolute path (`/` on Unix, the drive
/// root such as `C:\` on Windows).
///
/// The Back entry is omitted at this path, so navigation can never escape it.
pub fn fs_root(path: &Path) -> PathBuf {
    path.ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_keeps_absolute_input() -> Result<(), Box<dyn std::error::Error>> {
        #[cfg(unix)]
        {
            let p = absolute_path(Path::new("/tmp/somewhere"))?;
            assert_eq!(p, PathBuf::from("/tmp/somewhere"));
        }
        Ok(())
    }

    #[test]
    fn absolute_path_anchors_relative_input() -> Result<(), Box<dyn std::error::Error>> {
        let p = absolute_path(Path::new("some/relative"))?;
        assert!(p.is_absolute());
        assert!(p.ends_with("some/relative"));
        Ok(())
    }

    #[test]
    fn fs_root_of_nested_path() {
        #[cfg(unix)]
        assert_eq!(fs_root(Path::new("/usr/local/bin")), PathBuf::from("/"));
        #[cfg(windows)]
        assert_eq!(fs_root(Path::new("C:\\Users\\dev")), PathBuf::from("C:\\"));
    }

    #[test]
    fn fs_root_of_root_is_root() {
        #[cfg(unix)]
        assert_eq!(fs_root(Path::new("/")), PathBuf::from("/"));
    }
}
