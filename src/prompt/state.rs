//! Navigation state machine for fspick.
//!
//! [NavState] owns the whole mutable state of a prompt session: the current
//! directory, its listing, the cursor, and the mode. It consumes the closed
//! set of semantic [Event]s the router produces and reports back what should
//! happen next as a [Step]. Nothing else holds a mutable reference to this
//! state.
//!
//! `Answered` is terminal: once a selection has been produced, every further
//! event is a no-op.

use crate::config::PromptOptions;
use crate::error::PromptError;
use crate::fs::listing::{Entry, EntryKind, Listing};
use crate::fs::resolve::resolve_entry;
use crate::utils::{absolute_path, fs_root};

use std::fs;
use std::path::{Path, PathBuf};

/// The answer produced on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    is_directory: bool,
    is_file: bool,
    path: PathBuf,
}

impl Selection {
    fn directory(path: PathBuf) -> Self {
        Selection {
            is_directory: true,
            is_file: false,
            path,
        }
    }

    fn file(path: PathBuf) -> Self {
        Selection {
            is_directory: false,
            is_file: true,
            path,
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

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Input mode. `Searching` carries the accumulated term; `Answered` is
/// terminal and carries the produced selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Searching(String),
    Answered(Selection),
}

/// A keystroke routed into an active search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    Char(char),
    Backspace,
}

/// Semantic events consumed by the machine. The router is the only producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    MoveUp,
    MoveDown,
    EnterSearch,
    SearchKey(SearchInput),
    /// Enter: act on the selected entry (submit, drill or go back).
    Select,
    /// The `-` shortcut: jump to the parent directory.
    GoBack,
    /// The `.` shortcut: submit the selected entry as the answer.
    SubmitSelected,
}

/// What the caller should do after an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing changed.
    Idle,
    /// State changed; repaint.
    Render,
    /// The prompt answered. No further events will have any effect.
    Done(Selection),
}

/// The single mutable state of the prompt.
pub struct NavState<'a> {
    options: &'a PromptOptions,
    current_path: PathBuf,
    root: PathBuf,
    listing: Listing,
    cursor: usize,
    mode: Mode,
}

impl<'a> NavState<'a> {
    /// Validates the configured base path and composes the initial listing.
    ///
    /// A missing or non-directory base path is fatal here, before any
    /// interaction begins. The cursor starts on the configured default entry
    /// when it exists in the listing, otherwise on the first choice.
    pub fn new(options: &'a PromptOptions) -> Result<Self, PromptError> {
        let base = absolute_path(options.base_path())?;

        match fs::metadata(&base) {
            Ok(md) if md.is_dir() => {}
            Ok(_) => return Err(PromptError::NotADirectory(base)),
            Err(_) => return Err(PromptError::NoSuchDirectory(base)),
        }

        let root = fs_root(&base);
        let listing = Listing::compose(&base, &root, &options.scan_options())?;
        let cursor = listing
            .real_choices()
            .position(|e| e.label() == options.default_entry_label())
            .unwrap_or(0);

        Ok(NavState {
            options,
            current_path: base,
            root,
            listing,
            cursor,
            mode: Mode::Browsing,
        })
    }

    // Accessors

    #[inline]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    #[inline]
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn options(&self) -> &PromptOptions {
        self.options
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, Mode::Searching(_))
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.mode, Mode::Answered(_))
    }

    pub fn search_term(&self) -> Option<&str> {
        match &self.mode {
            Mode::Searching(term) => Some(term),
            _ => None,
        }
    }

    /// The entry the cursor currently addresses.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.listing.real_choice(self.cursor)
    }

    /// Applies one semantic event. Events arriving after the machine has
    /// answered are ignored wholesale.
    pub fn apply(&mut self, event: Event) -> Step {
        if self.is_answered() {
            return Step::Idle;
        }

        match event {
            Event::MoveUp => self.move_cursor(true),
            Event::MoveDown => self.move_cursor(false),
            Event::EnterSearch => self.enter_search(),
            Event::SearchKey(input) => self.search_key(input),
            Event::Select => self.select(),
            Event::GoBack => self.go_back(),
            Event::SubmitSelected => self.submit_selected(),
        }
    }

    // Cursor movement

    fn move_cursor(&mut self, up: bool) -> Step {
        if self.is_searching() {
            return Step::Idle;
        }

        let len = self.listing.real_choice_count();
        self.cursor = if up {
            if self.cursor > 0 { self.cursor - 1 } else { len - 1 }
        } else if self.cursor + 1 < len {
            self.cursor + 1
        } else {
            0
        };
        Step::Render
    }

    // Search session

    fn enter_search(&mut self) -> Step {
        if self.is_searching() {
            return Step::Idle;
        }
        self.mode = Mode::Searching(String::new());
        Step::Render
    }

    fn search_key(&mut self, input: SearchInput) -> Step {
        let Mode::Searching(term) = &mut self.mode else {
            return Step::Idle;
        };

        match input {
            SearchInput::Backspace => {
                term.pop();
            }
            SearchInput::Char(c) => term.push(c),
        }

        if term.is_empty() {
            // An emptied term ends the session; the cursor keeps whatever
            // position the search left it at.
            self.mode = Mode::Browsing;
            return Step::Render;
        }

        let needle = term.to_lowercase();
        if let Some(idx) = self
            .listing
            .real_choices()
            .position(|e| e.label().to_lowercase().starts_with(&needle))
        {
            self.cursor = idx;
        }
        Step::Render
    }

    // Selection handling

    /// Enter acts on the selected entry, captured against the cursor as it
    /// is right now. An active search session ends first either way.
    fn select(&mut self) -> Step {
        if self.is_searching() {
            self.mode = Mode::Browsing;
        }

        let Some(entry) = self.selected_entry().cloned() else {
            return Step::Render;
        };

        match entry.kind() {
            EntryKind::Current => self.answer_current(),
            EntryKind::Back => self.go_back(),
            EntryKind::Real => {
                let meta = resolve_entry(&self.current_path, &entry);
                match meta {
                    Some(m) if m.is_directory() => self.navigate(self.current_path.join(entry.label())),
                    Some(m) if m.is_file() && self.options.file_selectable() => {
                        self.answer(Selection::file(self.current_path.join(entry.label())))
                    }
                    // Unselectable file or dead entry: Enter does nothing.
                    _ => Step::Render,
                }
            }
            EntryKind::Separator => Step::Render,
        }
    }

    /// The `.` shortcut submits whatever the cursor is on, with the same file
    /// gating as Enter.
    fn submit_selected(&mut self) -> Step {
        let Some(entry) = self.selected_entry().cloned() else {
            return Step::Idle;
        };

        match entry.kind() {
            EntryKind::Current => self.answer_current(),
            EntryKind::Back => {
                let parent = self
                    .current_path
                    .parent()
                    .unwrap_or(&self.current_path)
                    .to_path_buf();
                self.answer(Selection::directory(parent))
            }
            EntryKind::Real => {
                let meta = resolve_entry(&self.current_path, &entry);
                match meta {
                    Some(m) if m.is_directory() => {
                        self.answer(Selection::directory(self.current_path.join(entry.label())))
                    }
                    Some(m) if m.is_file() && self.options.file_selectable() => {
                        self.answer(Selection::file(self.current_path.join(entry.label())))
                    }
                    _ => Step::Idle,
                }
            }
            EntryKind::Separator => Step::Idle,
        }
    }

    fn go_back(&mut self) -> Step {
        if self.current_path == self.root {
            // No Back entry exists at the root; the shortcut is inert too.
            return Step::Idle;
        }
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return Step::Idle;
        };
        self.navigate(parent)
    }

    /// Moves into `target`, recomposing the listing and resetting the cursor.
    ///
    /// When the target cannot be read the event is inert: the machine stays
    /// at the last valid directory with listing and cursor untouched, rather
    /// than transitioning into a directory it cannot display.
    fn navigate(&mut self, target: PathBuf) -> Step {
        match Listing::compose(&target, &self.root, &self.options.scan_options()) {
            Ok(listing) => {
                self.current_path = target;
                self.listing = listing;
                self.cursor = 0;
                self.mode = Mode::Browsing;
                Step::Render
            }
            Err(_) => Step::Idle,
        }
    }

    fn answer_current(&mut self) -> Step {
        self.answer(Selection::directory(self.current_path.clone()))
    }

    fn answer(&mut self, selection: Selection) -> Step {
        self.mode = Mode::Answered(selection.clone());
        Step::Done(selection)
    }
}
