//! Filesystem layer for fspick.
//!
//! This module contains the non-interactive pieces the prompt is built on:
//! - [scan]: directory content listing with hidden/file/predicate filtering.
//! - [listing]: composition of the navigable choice list (synthetic `.` and
//!   `..` entries, sorted real entries, trailing separator).
//! - [resolve]: lazy metadata resolution, producing an annotated view of a
//!   listing without mutating it.
//!
//! Most callers will import [Listing], [Entry] and [directory_content] from
//! this module.

pub mod listing;
pub mod resolve;
pub mod scan;

pub use listing::{BACK, CURRENT, Entry, EntryKind, Listing};
pub use resolve::{EntryMeta, ResolvedEntry, resolve_entry, resolve_listing};
pub use scan::{ItemPredicate, ScanOptions, directory_content};
