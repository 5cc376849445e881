//! Prompt construction options.
//!
//! [PromptOptions] is built once by the host program and never mutated while
//! the prompt runs. Every knob has the permissive default: files shown and
//! selectable, hidden entries off, icons on.

use crate::fs::scan::{ItemPredicate, ScanOptions};
use crate::ui::icons::Icons;

use std::path::{Path, PathBuf};

/// Default number of listing rows shown before pagination kicks in.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Read-only configuration for one prompt session.
pub struct PromptOptions {
    message: String,
    base_path: PathBuf,
    default_entry: String,
    display_files: bool,
    display_hidden: bool,
    can_select_file: bool,
    icons: Icons,
    page_size: usize,
    show_item: Option<Box<ItemPredicate>>,
}

impl PromptOptions {
    /// Creates options rooted at `base_path`, the only mandatory parameter.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        PromptOptions {
            message: "Select a path".to_string(),
            base_path: base_path.into(),
            default_entry: crate::fs::CURRENT.to_string(),
            display_files: true,
            display_hidden: false,
            can_select_file: true,
            icons: Icons::default(),
            page_size: DEFAULT_PAGE_SIZE,
            show_item: None,
        }
    }

    // Builder-style setters

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Label of the entry the cursor starts on. Falls back to the first
    /// choice when the label is not present in the initial listing.
    pub fn default_entry(mut self, label: impl Into<String>) -> Self {
        self.default_entry = label.into();
        self
    }

    pub fn display_files(mut self, yes: bool) -> Self {
        self.display_files = yes;
        self
    }

    pub fn display_hidden(mut self, yes: bool) -> Self {
        self.display_hidden = yes;
        self
    }

    /// When false, files are listed (subject to `display_files`) but cannot
    /// terminate the prompt; only directories and the `.` marker can.
    pub fn can_select_file(mut self, yes: bool) -> Self {
        self.can_select_file = yes;
        self
    }

    pub fn icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    pub fn page_size(mut self, rows: usize) -> Self {
        self.page_size = rows.max(1);
        self
    }

    /// Extra per-entry filter, ANDed with the directory/file qualification.
    pub fn show_item(
        mut self,
        predicate: impl Fn(bool, bool, &Path) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.show_item = Some(Box::new(predicate));
        self
    }

    // Accessors

    #[inline]
    pub fn message_text(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    #[inline]
    pub fn default_entry_label(&self) -> &str {
        &self.default_entry
    }

    #[inline]
    pub fn files_displayed(&self) -> bool {
        self.display_files
    }

    #[inline]
    pub fn hidden_displayed(&self) -> bool {
        self.display_hidden
    }

    #[inline]
    pub fn file_selectable(&self) -> bool {
        self.can_select_file
    }

    #[inline]
    pub fn icon_set(&self) -> &Icons {
        &self.icons
    }

    #[inline]
    pub fn page_rows(&self) -> usize {
        self.page_size
    }

    /// The scanner-facing view of these options.
    pub fn scan_options(&self) -> ScanOptions<'_> {
        ScanOptions {
            include_hidden: self.display_hidden,
            include_files: self.display_files,
            predicate: self.show_item.as_deref(),
        }
    }
}
