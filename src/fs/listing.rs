//! Choice list composition for fspick.
//!
//! A [Listing] is the ordered set of entries shown for one directory:
//! `[Current, Back?, sorted real entries.., Separator]`. The Back entry is
//! omitted at the filesystem root so navigation can never escape it.
//!
//! Listings are rebuilt whenever the directory changes, never patched, so a
//! stale listing is never observed.

use crate::fs::scan::{ScanOptions, directory_content};

use std::io;
use std::path::Path;

/// Label of the synthetic entry that selects the displayed directory itself.
pub const CURRENT: &str = ".";

/// Label of the synthetic entry that navigates to the parent directory.
pub const BACK: &str = "..";

/// Discriminates synthetic markers from real filesystem entries and the
/// visual separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Current,
    Back,
    Real,
    Separator,
}

/// One line of the navigable listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    label: String,
    kind: EntryKind,
}

impl Entry {
    fn current() -> Self {
        Entry {
            label: CURRENT.to_string(),
            kind: EntryKind::Current,
        }
    }

    fn back() -> Self {
        Entry {
            label: BACK.to_string(),
            kind: EntryKind::Back,
        }
    }

    fn real(label: String) -> Self {
        Entry {
            label,
            kind: EntryKind::Real,
        }
    }

    fn separator() -> Self {
        Entry {
            label: String::new(),
            kind: EntryKind::Separator,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Separators are decoration only: never selectable, never addressed by
    /// the cursor.
    #[inline]
    pub fn is_separator(&self) -> bool {
        self.kind == EntryKind::Separator
    }
}

/// Ordered entry sequence for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    /// Composes the listing for `path`.
    ///
    /// Deterministic for identical directory contents and options: the real
    /// entries come back sorted from the scanner and the synthetic
    /// prefix/suffix is fixed.
    pub fn compose(path: &Path, root: &Path, opts: &ScanOptions<'_>) -> io::Result<Listing> {
        let names = directory_content(path, opts)?;

        let mut entries = Vec::with_capacity(names.len() + 3);
        entries.push(Entry::current());
        if path != root {
            entries.push(Entry::back());
        }
        entries.extend(names.into_iter().map(Entry::real));
        entries.push(Entry::separator());

        Ok(Listing { entries })
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The selectable entries, in listing order. This is the view the cursor
    /// indexes into and search matches against.
    pub fn real_choices(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_separator())
    }

    pub fn real_choice(&self, idx: usize) -> Option<&Entry> {
        self.real_choices().nth(idx)
    }

    /// Always at least 1: the Current entry is unconditional.
    pub fn real_choice_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_separator()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rng;
    use rand::seq::SliceRandom;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn labels(listing: &Listing) -> Vec<(&str, EntryKind)> {
        listing
            .entries()
            .iter()
            .map(|e| (e.label(), e.kind()))
            .collect()
    }

    #[test]
    fn composition_order_below_root() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("b"))?;
        fs::create_dir(dir.path().join("a"))?;

        let root = dir.path().parent().ok_or("tempdir has no parent")?;
        let opts = ScanOptions {
            include_files: true,
            ..Default::default()
        };
        let listing = Listing::compose(dir.path(), root, &opts)?;

        assert_eq!(
            labels(&listing),
            vec![
                (".", EntryKind::Current),
                ("..", EntryKind::Back),
                ("a", EntryKind::Real),
                ("b", EntryKind::Real),
                ("", EntryKind::Separator),
            ]
        );
        Ok(())
    }

    #[test]
    fn back_omitted_at_root() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;

        // Treating the scanned directory as the root drops the Back entry.
        let opts = ScanOptions::default();
        let listing = Listing::compose(dir.path(), dir.path(), &opts)?;

        assert!(
            listing
                .real_choices()
                .all(|e| e.kind() != EntryKind::Back)
        );
        assert_eq!(listing.real_choice(0).map(Entry::kind), Some(EntryKind::Current));
        Ok(())
    }

    #[test]
    fn separator_not_a_real_choice() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("file.txt"))?;

        let opts = ScanOptions {
            include_files: true,
            ..Default::default()
        };
        let listing = Listing::compose(dir.path(), dir.path(), &opts)?;

        assert_eq!(listing.entries().len(), 3);
        assert_eq!(listing.real_choice_count(), 2);
        assert!(listing.real_choice(2).is_none());
        Ok(())
    }

    #[test]
    fn deterministic_under_shuffled_creation() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let mut names = vec!["delta", "alpha", "omega", "beta", "kappa"];
        names.shuffle(&mut rng());
        for name in &names {
            File::create(dir.path().join(name))?;
        }

        let opts = ScanOptions {
            include_files: true,
            ..Default::default()
        };
        let first = Listing::compose(dir.path(), dir.path(), &opts)?;
        let second = Listing::compose(dir.path(), dir.path(), &opts)?;

        assert_eq!(first, second);
        let real: Vec<&str> = first
            .real_choices()
            .filter(|e| e.kind() == EntryKind::Real)
            .map(Entry::label)
            .collect();
        assert_eq!(real, vec!["alpha", "beta", "delta", "kappa", "omega"]);
        Ok(())
    }
}
