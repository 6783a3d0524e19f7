//! Horizontal tiling of a grid to an exact width.

use serde::{Deserialize, Serialize};

use super::chargrid::{padded_row, CharGrid};

/// What to do with the partial repetition at the end of a tiled row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMethod {
    /// Cut the pattern off mid-way.
    #[default]
    Crop,
    /// Leave the remainder blank, filled with the fill glyph.
    LeaveSpace,
}

impl CharGrid {
    /// Tile this grid horizontally to exactly `width` columns.
    ///
    /// Rows are first padded with `fill` to the grid width so every row tiles
    /// at the same period. Each output row holds as many whole repetitions as
    /// fit, then the remainder is handled by `trim`. An empty or zero-width
    /// grid tiles to the empty grid.
    ///
    /// ```rust
    /// use textcore::{CharGrid, TrimMethod};
    ///
    /// let tile = CharGrid::parse("-=.");
    /// assert_eq!(tile.repeat_to_width(8, ' ', TrimMethod::Crop).render(), "-=.-=.-=");
    /// assert_eq!(tile.repeat_to_width(8, ' ', TrimMethod::LeaveSpace).render(), "-=.-=.  ");
    /// ```
    pub fn repeat_to_width(&self, width: usize, fill: char, trim: TrimMethod) -> CharGrid {
        let period = self.width();
        if period == 0 {
            return CharGrid::new();
        }
        let repetitions = width / period;
        let remainder = width % period;

        self.rows()
            .map(|row| {
                let pattern = padded_row(row, period, fill);
                let mut out = Vec::with_capacity(width);
                for _ in 0..repetitions {
                    out.extend_from_slice(&pattern);
                }
                match trim {
                    TrimMethod::Crop => out.extend_from_slice(&pattern[..remainder]),
                    TrimMethod::LeaveSpace => out.resize(width, fill),
                }
                out
            })
            .collect()
    }
}
