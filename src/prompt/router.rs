//! Keystroke classification and the prompt event loop.
//!
//! Raw [KeyEvent]s arrive over a channel from the reader thread. [classify]
//! turns each into at most one semantic [Event] for the current mode; keys
//! with no meaning in that mode are dropped here so the state machine only
//! ever sees events it can act on. The shortcut keys (`/`, `-`, `.`) are
//! ordinary search characters while a search session is active.

use crate::error::PromptError;
use crate::prompt::state::{Event, Mode, NavState, SearchInput, Selection, Step};

use crossbeam_channel::Receiver;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Characters accepted into a search term. Everything else is ignored while
/// searching.
fn is_search_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | ' ')
}

/// Maps a key press to a semantic event for the given mode, or `None` when
/// the key means nothing right now.
pub fn classify(key: &KeyEvent, mode: &Mode) -> Option<Event> {
    let searching = matches!(mode, Mode::Searching(_));

    match key.code {
        KeyCode::Up if !searching => Some(Event::MoveUp),
        KeyCode::Down if !searching => Some(Event::MoveDown),
        KeyCode::Enter => Some(Event::Select),
        KeyCode::Backspace if searching => Some(Event::SearchKey(SearchInput::Backspace)),
        KeyCode::Char(c) => {
            if searching {
                is_search_char(c).then_some(Event::SearchKey(SearchInput::Char(c)))
            } else {
                match c {
                    '/' => Some(Event::EnterSearch),
                    '-' => Some(Event::GoBack),
                    '.' => Some(Event::SubmitSelected),
                    _ => None,
                }
            }
        }
        _ => None,
    }
}

/// Drives the state machine from the key channel until an answer or an
/// interrupt, repainting through `redraw` whenever the state changed.
pub struct EventRouter {
    keys: Receiver<KeyEvent>,
    shutdown: Arc<AtomicBool>,
}

impl EventRouter {
    pub fn new(keys: Receiver<KeyEvent>, shutdown: Arc<AtomicBool>) -> Self {
        EventRouter { keys, shutdown }
    }

    /// Runs the loop to completion. Returns the selection on submit, or
    /// [PromptError::Interrupted] on Ctrl-C, Escape, or a dead channel.
    /// Either way the reader thread is told to stop before returning.
    pub fn run<F>(
        &self,
        state: &mut NavState<'_>,
        mut redraw: F,
    ) -> Result<Selection, PromptError>
    where
        F: FnMut(&NavState<'_>) -> std::io::Result<()>,
    {
        loop {
            let key = match self.keys.recv() {
                Ok(key) => key,
                Err(_) => {
                    self.stop();
                    return Err(PromptError::Interrupted);
                }
            };

            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl_c = key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key.code == KeyCode::Esc {
                self.stop();
                return Err(PromptError::Interrupted);
            }

            let step = match classify(&key, state.mode()) {
                Some(event) => state.apply(event),
                None => Step::Idle,
            };

            match step {
                Step::Done(selection) => {
                    self.stop();
                    return Ok(selection);
                }
                Step::Render => redraw(state)?,
                // While browsing every key press repaints; search renders
                // only follow the term.
                Step::Idle if !state.is_searching() => redraw(state)?,
                Step::Idle => {}
            }
        }
    }

    fn stop(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromptOptions;

    use crossbeam_channel::unbounded;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn browsing_keys_classify_to_navigation() {
        let mode = Mode::Browsing;
        assert_eq!(classify(&press(KeyCode::Up), &mode), Some(Event::MoveUp));
        assert_eq!(classify(&press(KeyCode::Down), &mode), Some(Event::MoveDown));
        assert_eq!(classify(&press(KeyCode::Enter), &mode), Some(Event::Select));
        assert_eq!(
            classify(&press(KeyCode::Char('/')), &mode),
            Some(Event::EnterSearch)
        );
        assert_eq!(
            classify(&press(KeyCode::Char('-')), &mode),
            Some(Event::GoBack)
        );
        assert_eq!(
            classify(&press(KeyCode::Char('.')), &mode),
            Some(Event::SubmitSelected)
        );
        assert_eq!(classify(&press(KeyCode::Char('x')), &mode), None);
        assert_eq!(classify(&press(KeyCode::Backspace), &mode), None);
    }

    #[test]
    fn shortcuts_become_literal_characters_while_searching() {
        let mode = Mode::Searching(String::from("re"));
        assert_eq!(
            classify(&press(KeyCode::Char('-')), &mode),
            Some(Event::SearchKey(SearchInput::Char('-')))
        );
        assert_eq!(
            classify(&press(KeyCode::Char('.')), &mode),
            Some(Event::SearchKey(SearchInput::Char('.')))
        );
        // `/` is not a filename search character; a second press is dropped.
        assert_eq!(classify(&press(KeyCode::Char('/')), &mode), None);
        assert_eq!(
            classify(&press(KeyCode::Backspace), &mode),
            Some(Event::SearchKey(SearchInput::Backspace))
        );
    }

    #[test]
    fn arrows_are_dropped_while_searching() {
        let mode = Mode::Searching(String::from("a"));
        assert_eq!(classify(&press(KeyCode::Up), &mode), None);
        assert_eq!(classify(&press(KeyCode::Down), &mode), None);
        assert_eq!(classify(&press(KeyCode::Enter), &mode), Some(Event::Select));
    }

    #[test]
    fn run_submits_on_enter() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;

        let options = PromptOptions::new(dir.path());
        let mut state = NavState::new(&options)?;

        let (tx, rx) = unbounded();
        tx.send(press(KeyCode::Enter))?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let router = EventRouter::new(rx, Arc::clone(&shutdown));
        let selection = router.run(&mut state, |_| Ok(()))?;

        assert!(selection.is_directory());
        assert!(shutdown.load(Ordering::SeqCst));
        Ok(())
    }

    #[test]
    fn run_interrupts_on_ctrl_c() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let options = PromptOptions::new(dir.path());
        let mut state = NavState::new(&options)?;

        let (tx, rx) = unbounded();
        tx.send(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let router = EventRouter::new(rx, Arc::clone(&shutdown));
        let result = router.run(&mut state, |_| Ok(()));

        assert!(matches!(result, Err(PromptError::Interrupted)));
        assert!(shutdown.load(Ordering::SeqCst));
        Ok(())
    }

    #[test]
    fn run_interrupts_when_the_channel_closes() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let options = PromptOptions::new(dir.path());
        let mut state = NavState::new(&options)?;

        let (tx, rx) = unbounded::<KeyEvent>();
        drop(tx);

        let router = EventRouter::new(rx, Arc::new(AtomicBool::new(false)));
        let result = router.run(&mut state, |_| Ok(()));
        assert!(matches!(result, Err(PromptError::Interrupted)));
        Ok(())
    }

    #[test]
    fn run_walks_a_full_search_and_drill_session() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let sub = dir.path().join("projects");
        fs::create_dir(&sub)?;
        File::create(dir.path().join("readme"))?;

        let options = PromptOptions::new(dir.path());
        let mut state = NavState::new(&options)?;

        let (tx, rx) = unbounded();
        for key in [
            press(KeyCode::Char('/')),
            press(KeyCode::Char('p')),
            press(KeyCode::Char('r')),
            press(KeyCode::Enter), // drills into projects, ends the search
            press(KeyCode::Enter), // submits projects itself
        ] {
            tx.send(key)?;
        }

        let mut redraws = 0;
        let router = EventRouter::new(rx, Arc::new(AtomicBool::new(false)));
        let selection = router.run(&mut state, |_| {
            redraws += 1;
            Ok(())
        })?;

        assert!(selection.is_directory());
        assert_eq!(selection.path(), sub.as_path());
        assert!(redraws >= 3);
        Ok(())
    }

    #[test]
    fn only_key_presses_are_routed() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let options = PromptOptions::new(dir.path());
        let mut state = NavState::new(&options)?;

        let (tx, rx) = unbounded();
        let mut release = press(KeyCode::Down);
        release.kind = KeyEventKind::Release;
        tx.send(release)?;
        tx.send(press(KeyCode::Enter))?;

        let router = EventRouter::new(rx, Arc::new(AtomicBool::new(false)));
        router.run(&mut state, |_| Ok(()))?;
        // The released Down never moved the cursor off ".".
        assert_eq!(state.cursor(), 0);
        Ok(())
    }
}
