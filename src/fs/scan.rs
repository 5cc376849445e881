//! Directory content listing for fspick.
//!
//! Produces the sorted basenames a listing is built from. Filtering policy:
//! symlinks are never listed (not followed, so no cycles and no stale
//! targets), files only appear when requested, hidden entries only when
//! requested, and an optional caller predicate gates everything else.
//!
//! A child whose metadata cannot be read is skipped silently; one unreadable
//! entry must never break browsing. An unreadable base directory is an error.

use std::fs;
use std::io;
use std::path::Path;

/// Caller-supplied entry filter: `(is_dir, is_file, full_path) -> keep`.
///
/// Evaluated only for entries that already passed the directory/file test.
pub type ItemPredicate = dyn Fn(bool, bool, &Path) -> bool + Send + Sync;

/// Filtering configuration for one directory scan.
#[derive(Clone, Copy, Default)]
pub struct ScanOptions<'a> {
    pub include_hidden: bool,
    pub include_files: bool,
    pub predicate: Option<&'a ItemPredicate>,
}

/// Lists the qualifying basenames of `path`, lexicographically sorted.
///
/// Fails only when `path` itself cannot be read; per-entry failures drop the
/// entry and nothing else.
pub fn directory_content(path: &Path, opts: &ScanOptions<'_>) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let full_path = entry.path();
        let md = match fs::symlink_metadata(&full_path) {
            Ok(md) => md,
            Err(_) => continue,
        };

        if md.file_type().is_symlink() {
            continue;
        }

        let is_dir = md.is_dir();
        let is_file = md.is_file() && opts.include_files;
        if !(is_dir || is_file) {
            continue;
        }

        if let Some(pred) = opts.predicate
            && !pred(is_dir, is_file, &full_path)
        {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !opts.include_hidden && name.starts_with('.') {
            continue;
        }

        names.push(name);
    }

    names.sort();
    Ok(names)
}
