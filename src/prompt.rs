//! The interactive prompt itself.
//!
//! - [state]: the navigation state machine, from events to a [Selection].
//! - [router]: keystroke classification and the blocking event loop.
//! - [terminal]: raw mode guard and the key reader thread.
//!
//! [FsPrompt] wires the three together over stdout.

pub mod router;
pub mod state;
pub mod terminal;

pub use router::EventRouter;
pub use state::{Event, Mode, NavState, SearchInput, Selection, Step};
pub use terminal::{RawModeGuard, spawn_key_reader};

use crate::config::PromptOptions;
use crate::error::PromptError;
use crate::ui::{Screen, build_answered_frame, build_frame};

use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// An interactive filesystem picker over stdout.
///
/// ```no_run
/// use fspick::{FsPrompt, PromptOptions};
///
/// let options = PromptOptions::new(".").message("Where to?");
/// let selection = FsPrompt::new(options)?.run()?;
/// println!("{}", selection.path().display());
/// # Ok::<(), fspick::PromptError>(())
/// ```
pub struct FsPrompt {
    options: PromptOptions,
}

impl FsPrompt {
    /// Fails fast when the configured base path does not exist or is not a
    /// directory, before any terminal state is touched.
    pub fn new(options: PromptOptions) -> Result<Self, PromptError> {
        let base = crate::utils::absolute_path(options.base_path())?;
        match std::fs::metadata(&base) {
            Ok(md) if md.is_dir() => Ok(FsPrompt { options }),
            Ok(_) => Err(PromptError::NotADirectory(base)),
            Err(_) => Err(PromptError::NoSuchDirectory(base)),
        }
    }

    #[inline]
    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    /// Runs the prompt to completion.
    ///
    /// On submit the frame is replaced by a single confirmation line; on
    /// interrupt it is wiped.
    pub fn run(&self) -> Result<Selection, PromptError> {
        let mut state = NavState::new(&self.options)?;

        let guard = RawModeGuard::enable()?;
        let shutdown = Arc::new(AtomicBool::new(false));
        let keys = spawn_key_reader(Arc::clone(&shutdown));

        let mut screen = Screen::new(io::stdout());
        screen.draw(&build_frame(&state, &self.options))?;

        let router = EventRouter::new(keys, shutdown);
        let outcome = router.run(&mut state, |state| {
            screen.draw(&build_frame(state, &self.options))
        });

        let result = match outcome {
            Ok(selection) => {
                screen.draw(&build_answered_frame(self.options.message_text(), &selection))?;
                Ok(selection)
            }
            Err(err) => {
                screen.clear()?;
                Err(err)
            }
        };

        drop(guard);
        result
    }
}
