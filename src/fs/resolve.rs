//! Lazy metadata resolution for fspick listings.
//!
//! Resolution attaches directory/file information to listing entries without
//! mutating the listing: callers get a fresh annotated view. It re-stats on
//! every call because the displayed directory can change between renders while
//! the listing object stays the same; the stat is cheap and staleness is not.
//!
//! An entry whose metadata cannot be read stays unresolved: it is still shown
//! and navigable as a dead entry, but it cannot be drilled into or submitted
//! as a file.

use crate::fs::listing::{Entry, Listing};

use std::fs;
use std::path::Path;

/// Resolved type information for one entry. For real entries exactly one of
/// the two flags is set; the synthetic `.` and `..` entries resolve through
/// the owning directory and come back as directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    is_directory: bool,
    is_file: bool,
}

impl EntryMeta {
    pub(crate) fn new(is_directory: bool, is_file: bool) -> Self {
        EntryMeta {
            is_directory,
            is_file,
        }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.is_file
    }
}

/// One entry of an annotated listing view.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEntry<'a> {
    entry: &'a Entry,
    meta: Option<EntryMeta>,
}

impl<'a> ResolvedEntry<'a> {
    #[inline]
    pub fn entry(&self) -> &'a Entry {
        self.entry
    }

    #[inline]
    pub fn meta(&self) -> Option<EntryMeta> {
        self.meta
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.meta.is_some_and(|m| m.is_directory())
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.meta.is_some_and(|m| m.is_file())
    }
}

/// Stats one entry relative to its owning directory.
///
/// Separators carry no metadata; `.` and `..` stat the directory itself and
/// its parent through the join, which is exactly the navigation semantics
/// they stand for.
pub fn resolve_entry(dir: &Path, entry: &Entry) -> Option<EntryMeta> {
    if entry.is_separator() {
        return None;
    }
    let md = fs::symlink_metadata(dir.join(entry.label())).ok()?;
    Some(EntryMeta::new(md.is_dir(), md.is_file()))
}

/// Produces a metadata-annotated view of the whole listing. Idempotent and
/// safe to call once per render.
pub fn resolve_listing<'a>(dir: &Path, listing: &'a Listing) -> Vec<ResolvedEntry<'a>> {
    listing
        .entries()
        .iter()
        .map(|entry| ResolvedEntry {
            entry,
            meta: resolve_entry(dir, entry),
        })
        .collect()
}
