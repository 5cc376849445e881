//! Rendering layer for fspick.
//!
//! - [icons]: the entry icon set, or the choice to go without.
//! - [paginate]: the sliding window that keeps the cursor visible when the
//!   listing outgrows the configured page size.
//! - [render]: pure frame composition plus the inline terminal writer that
//!   repaints the prompt in place (no alternate screen).

pub mod icons;
pub mod paginate;
pub mod render;

pub use icons::{IconSet, Icons};
pub use paginate::Paginator;
pub use render::{FrameLine, LineStyle, Screen, build_answered_frame, build_frame};
