//! Fixed-width line padding.
//!
//! Renders one line of text into an exact width, with optional caps at both
//! ends and filler placed by alignment or spread across split segments.
//!
//! ## Anatomy of a line
//!
//! ```text
//! //░░░░░░░Example title░░░░░░░░//
//! ^^                            ^^   caps
//!   ^                          ^     cap spaces (has_extra_spaces)
//!    ^^^^^               ^^^^^^      alignment filler
//!         ^             ^            text spaces (space_around_text)
//! ```
//!
//! ## Split segments
//!
//! A split marker (default `@`) breaks the text into segments. Alignment is
//! ignored and the filler goes into the gaps instead, with any remainder
//! handed to the leftmost gaps first:
//!
//! ```rust
//! use textcore::PadLine;
//!
//! let line = PadLine::new(20).glyph('.').space_around_text(false).pad("a@b@c");
//! assert_eq!(line, "a.........b........c");
//! ```
//!
//! ## Overflow
//!
//! Text is never truncated. When the fixed content is wider than the target
//! the filler collapses to nothing and the line comes out longer.

mod layout;
mod options;
mod types;

pub use layout::{distribute_gaps, distribute_sides, Fill, LineLayout};
pub use options::{pad_line, PadLine};
pub use types::{Alignment, LineCaps, Measure};
