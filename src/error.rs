//! Error type for prompt construction and execution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or running a prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The configured base path does not exist.
    #[error("no such directory: {}", .0.display())]
    NoSuchDirectory(PathBuf),

    /// The configured base path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Terminal or filesystem I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The user cancelled with Ctrl-C or Escape.
    #[error("prompt interrupted")]
    Interrupted,
}
