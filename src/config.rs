//! Configuration for fspick.
//!
//! Two layers live here:
//! - [options]: the immutable [PromptOptions] struct a host program builds to
//!   construct a prompt. Captured once, read-only afterwards.
//! - [file]: the `fspick.toml` settings the `fspick` binary loads and turns
//!   into prompt options.

pub mod file;
pub mod options;

pub use file::Settings;
pub use options::PromptOptions;
