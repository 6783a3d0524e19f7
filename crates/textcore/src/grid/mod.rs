//! Character grids for assembling blocks of monospaced text.
//!
//! A [`CharGrid`] is a list of rows of `char`s. Rows may be ragged; the grid
//! width is always the longest row. Grids are combined with named joins that
//! return new grids:
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`join_horizontally`](CharGrid::join_horizontally) | rows concatenated side by side |
//! | [`join_vertically`](CharGrid::join_vertically) | rows of the second grid below the first |
//! | [`join_with_caps`](CharGrid::join_with_caps) | every row bracketed by two cap grids |
//! | [`repeated`](CharGrid::repeated) | the grid side by side `n` times |
//! | [`repeat_to_width`](CharGrid::repeat_to_width) | the grid tiled to an exact width |
//!
//! ```rust
//! use textcore::CharGrid;
//!
//! let corner = CharGrid::parse("+-\n| ");
//! let block = corner.repeated(3).join_vertically(&CharGrid::parse("end"), Some(' '));
//! assert_eq!(block.render(), "+-+-+-\n| | | \nend   ");
//! ```
//!
//! Horizontal joins are associative, and `repeated(n)` is `n` horizontal
//! joins starting from the empty grid.

mod chargrid;
mod join;
mod panel;
mod tile;

pub use chargrid::CharGrid;
pub use panel::{BorderStyle, Panel};
pub use tile::TrimMethod;
