//! fspick: an inline terminal prompt for picking a file or directory.
//!
//! The prompt renders a navigable directory listing right in the shell (no
//! alternate screen), with arrow-key movement, `/` incremental search, `-`
//! parent navigation and `.` quick submit. It resolves to a single
//! [Selection] carrying the chosen absolute path and whether it is a file or
//! a directory.
//!
//! ```no_run
//! use fspick::{FsPrompt, PromptOptions};
//!
//! let options = PromptOptions::new(".")
//!     .message("Pick a project directory")
//!     .can_select_file(false);
//! let selection = FsPrompt::new(options)?.run()?;
//! println!("{}", selection.path().display());
//! # Ok::<(), fspick::PromptError>(())
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod prompt;
pub mod ui;
pub mod utils;

pub use config::{PromptOptions, Settings};
pub use error::PromptError;
pub use prompt::{FsPrompt, Selection};
pub use ui::{IconSet, Icons};
