//! Frame composition and inline terminal output.
//!
//! Frames are built as plain [FrameLine] vectors first, with no terminal
//! involved, so layout is testable byte for byte. [Screen] then paints a
//! frame in place: it rewinds over the previously drawn rows and redraws,
//! keeping the prompt inline with the shell instead of taking over the
//! alternate screen.

use crate::config::PromptOptions;
use crate::fs::resolve::resolve_listing;
use crate::prompt::state::{Mode, NavState, Selection};
use crate::ui::paginate::Paginator;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Marker drawn in front of the entry under the cursor.
pub const POINTER: &str = "\u{276F}";

const SEPARATOR_RULE: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";
const SEARCH_HINT: &str = "(Use \"/\" key to search this directory)";
const BACK_HINT: &str = "(Use \"-\" key to navigate to the parent folder)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Dim,
    Highlight,
}

/// One row of a rendered frame, before any escape codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    text: String,
    style: LineStyle,
}

impl FrameLine {
    fn plain(text: impl Into<String>) -> Self {
        FrameLine {
            text: text.into(),
            style: LineStyle::Plain,
        }
    }

    fn dim(text: impl Into<String>) -> Self {
        FrameLine {
            text: text.into(),
            style: LineStyle::Dim,
        }
    }

    fn highlight(text: impl Into<String>) -> Self {
        FrameLine {
            text: text.into(),
            style: LineStyle::Highlight,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> LineStyle {
        self.style
    }
}

/// Composes the full prompt frame: question, current directory, the windowed
/// listing, and either the active search term or the key hints.
pub fn build_frame(state: &NavState<'_>, options: &PromptOptions) -> Vec<FrameLine> {
    let mut frame = vec![
        FrameLine::plain(format!("? {}", options.message_text())),
        FrameLine::dim(format!("Current directory: {}", state.current_path().display())),
    ];

    // Metadata is resolved against the directory as it is right now, so a
    // file swapped for a directory between frames changes its icon.
    let resolved = resolve_listing(state.current_path(), state.listing());

    let mut rows = Vec::with_capacity(resolved.len());
    let mut active_row = 0;
    let mut choice_idx = 0;
    for item in &resolved {
        if item.entry().is_separator() {
            rows.push(FrameLine::dim(format!("  {SEPARATOR_RULE}")));
            continue;
        }

        let selected = choice_idx == state.cursor();
        choice_idx += 1;
        if selected {
            active_row = rows.len();
        }

        let mut text = String::new();
        text.push_str(if selected { POINTER } else { " " });
        text.push(' ');
        if let Some(icon) = options.icon_set().for_entry(item.entry().kind(), item.meta()) {
            text.push_str(icon);
            text.push(' ');
        }
        text.push_str(item.entry().label());

        rows.push(if selected {
            FrameLine::highlight(text)
        } else {
            FrameLine::plain(text)
        });
    }

    let window = Paginator::new(options.page_rows()).window(rows.len(), active_row);
    frame.extend(rows.into_iter().skip(window.start).take(window.len()));

    match state.mode() {
        Mode::Searching(term) => frame.push(FrameLine::plain(format!("Search: {term}"))),
        _ => {
            frame.push(FrameLine::dim(SEARCH_HINT));
            frame.push(FrameLine::dim(BACK_HINT));
        }
    }

    frame
}

/// The single confirmation line left behind once the prompt has answered.
pub fn build_answered_frame(message: &str, selection: &Selection) -> Vec<FrameLine> {
    vec![FrameLine::plain(format!(
        "? {message} {}",
        selection.path().display()
    ))]
}

/// Inline frame painter. Tracks how many rows the previous frame used so the
/// next draw can rewind over them.
pub struct Screen<W: Write> {
    out: W,
    drawn_rows: u16,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Screen { out, drawn_rows: 0 }
    }

    #[inline]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Repaints the prompt with `frame`, replacing whatever the previous
    /// draw left on screen.
    pub fn draw(&mut self, frame: &[FrameLine]) -> io::Result<()> {
        self.rewind()?;

        let width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
        for line in frame {
            let text = clip_to_width(line.text(), width);
            match line.style() {
                LineStyle::Plain => queue!(self.out, Print(text))?,
                LineStyle::Dim => queue!(
                    self.out,
                    SetAttribute(Attribute::Dim),
                    Print(text),
                    SetAttribute(Attribute::NormalIntensity),
                )?,
                LineStyle::Highlight => queue!(
                    self.out,
                    SetForegroundColor(Color::Cyan),
                    Print(text),
                    ResetColor,
                )?,
            }
            queue!(self.out, Print("\r\n"))?;
        }

        self.drawn_rows = frame.len() as u16;
        self.out.flush()
    }

    /// Wipes the current frame without drawing a replacement.
    pub fn clear(&mut self) -> io::Result<()> {
        self.rewind()?;
        self.drawn_rows = 0;
        self.out.flush()
    }

    fn rewind(&mut self) -> io::Result<()> {
        if self.drawn_rows > 0 {
            queue!(
                self.out,
                MoveToColumn(0),
                MoveUp(self.drawn_rows),
                Clear(ClearType::FromCursorDown),
            )?;
        }
        Ok(())
    }
}

/// Truncates `text` to at most `width` terminal columns, counting wide
/// glyphs (icons included) as the columns they occupy.
fn clip_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
