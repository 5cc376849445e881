//! Entry icons for the listing.
//!
//! The set mirrors the three entry roles: the displayed directory itself,
//! other directories (including `..`), and plain files. Icons are a sum type
//! rather than an option-of-struct so "disabled" is an explicit state and not
//! a bundle of empty strings.

use crate::fs::listing::EntryKind;
use crate::fs::resolve::EntryMeta;

/// The three glyphs used in front of listing labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    current_dir: String,
    dir: String,
    file: String,
}

impl IconSet {
    pub fn new(
        current_dir: impl Into<String>,
        dir: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        IconSet {
            current_dir: current_dir.into(),
            dir: dir.into(),
            file: file.into(),
        }
    }

    #[inline]
    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    #[inline]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet::new("\u{1F4C2}", "\u{1F4C1}", "\u{1F4C4}")
    }
}

/// Icon configuration: a concrete set, or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icons {
    Set(IconSet),
    Disabled,
}

impl Default for Icons {
    fn default() -> Self {
        Icons::Set(IconSet::default())
    }
}

impl Icons {
    /// Picks the icon for an entry, if any. Unresolved real entries get no
    /// icon; their type is simply unknown.
    pub fn for_entry(&self, kind: EntryKind, meta: Option<EntryMeta>) -> Option<&str> {
        let Icons::Set(set) = self else {
            return None;
        };
        match kind {
            EntryKind::Current => Some(set.current_dir()),
            EntryKind::Back => Some(set.dir()),
            EntryKind::Real => meta.and_then(|m| {
                if m.is_directory() {
                    Some(set.dir())
                } else if m.is_file() {
                    Some(set.file())
                } else {
                    None
                }
            }),
            EntryKind::Separator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_yields_nothing() {
        let icons = Icons::Disabled;
        let meta = EntryMeta::new(true, false);
        assert_eq!(icons.for_entry(EntryKind::Current, Some(meta)), None);
        assert_eq!(icons.for_entry(EntryKind::Real, Some(meta)), None);
    }

    #[test]
    fn kinds_map_to_their_glyphs() {
        let icons = Icons::Set(IconSet::new(">", "+", "-"));
        assert_eq!(icons.for_entry(EntryKind::Current, None), Some(">"));
        assert_eq!(icons.for_entry(EntryKind::Back, None), Some("+"));

        let dir = EntryMeta::new(true, false);
        let file = EntryMeta::new(false, true);
        assert_eq!(icons.for_entry(EntryKind::Real, Some(dir)), Some("+"));
        assert_eq!(icons.for_entry(EntryKind::Real, Some(file)), Some("-"));
    }

    #[test]
    fn unresolved_real_entry_has_no_icon() {
        let icons = Icons::default();
        assert_eq!(icons.for_entry(EntryKind::Real, None), None);
        assert_eq!(icons.for_entry(EntryKind::Separator, None), None);
    }
}
