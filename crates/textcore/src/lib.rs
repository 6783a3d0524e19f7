//! TextCore - fixed-width text layout for monospaced output.
//!
//! TextCore renders text into exact widths and assembles the results into
//! blocks. It provides:
//!
//! - Line padding with alignment, caps, and split-marker segments
//! - Character grids with horizontal, vertical, and capped joins
//! - Bordered panels built from padded lines
//! - Repeating fill patterns and word reflow
//! - Regex match ranges for highlighting
//!
//! # Quick Start
//!
//! ```rust
//! use textcore::{CharGrid, LineCaps, PadLine};
//!
//! let padder = PadLine::new(32).glyph('░').caps(LineCaps::new("//", "//"));
//!
//! let title = padder.pad("Example title");
//! assert_eq!(title.chars().count(), 32);
//!
//! let split = PadLine::new(41).glyph('░').pad("Split ->@<- Split");
//! assert_eq!(split.chars().count(), 41);
//!
//! let mut block = CharGrid::new();
//! block.append_line(&title);
//! let block = block.join_vertically(&CharGrid::parse(&split), Some('░'));
//! assert_eq!(block.height(), 2);
//! assert_eq!(block.row(1).len(), 41);
//! ```
//!
//! # Modules
//!
//! | Area | Entry points |
//! |------|--------------|
//! | Padding | [`PadLine`], [`pad_line`], [`LineLayout`] |
//! | Grids | [`CharGrid`], [`Panel`], [`TrimMethod`] |
//! | Patterns | [`FillPattern`], [`repeat_pattern`] |
//! | Reflow | [`reflow`], [`indent_lines`] |
//! | Matching | [`MatchFinder`], [`find_all_match_ranges`] |
//!
//! Padding and grid operations never fail; an over-long line simply comes
//! out wider than requested. Errors ([`TextCoreError`]) come only from
//! compiling patterns, loading presets, and parsing option names.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events from the layout engine and matchers.

mod error;
mod grid;
mod matches;
mod pad;
mod pattern;
mod reflow;

pub use error::{Result, TextCoreError};
pub use grid::{BorderStyle, CharGrid, Panel, TrimMethod};
pub use matches::{find_all_match_ranges, MatchFinder, ThreePartMatch};
pub use pad::{
    distribute_gaps, distribute_sides, pad_line, Alignment, Fill, LineCaps, LineLayout, Measure,
    PadLine,
};
pub use pattern::{repeat_pattern, FillPattern};
pub use reflow::{indent_lines, reflow, ReflowOptions, Wrapping};
