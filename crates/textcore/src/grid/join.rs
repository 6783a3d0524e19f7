//! Combining grids side by side, top to bottom, and between caps.

use super::chargrid::{padded_row, CharGrid};

impl CharGrid {
    /// Place `other` to the right of this grid.
    ///
    /// Row `i` of the result is row `i` of `self` followed by row `i` of
    /// `other`, for every row of the taller grid. When one side runs out of
    /// rows its missing rows are empty, or, if `padding` is given, `padding`
    /// repeated to that side's own width so the columns stay aligned.
    ///
    /// ```rust
    /// use textcore::CharGrid;
    ///
    /// let left = CharGrid::parse("ab\ncd\nef");
    /// let right = CharGrid::parse("12");
    ///
    /// assert_eq!(left.join_horizontally(&right, None).render(), "ab12\ncd\nef");
    /// assert_eq!(
    ///     right.join_horizontally(&left, Some('.')).render(),
    ///     "12ab\n..cd\n..ef"
    /// );
    /// ```
    pub fn join_horizontally(&self, other: &CharGrid, padding: Option<char>) -> CharGrid {
        let height = self.height().max(other.height());
        (0..height)
            .map(|index| {
                let mut row = side_row(self, index, padding);
                row.extend(side_row(other, index, padding));
                row
            })
            .collect()
    }

    /// Place `other` below this grid.
    ///
    /// Without padding the rows of `other` are appended as they are. With
    /// padding each appended row is right-padded to the wider of the two
    /// grids; rows of `self` are left alone.
    ///
    /// ```rust
    /// use textcore::CharGrid;
    ///
    /// let top = CharGrid::parse("abcd");
    /// let bottom = CharGrid::parse("x\nyz");
    ///
    /// assert_eq!(top.join_vertically(&bottom, None).render(), "abcd\nx\nyz");
    /// assert_eq!(top.join_vertically(&bottom, Some('-')).render(), "abcd\nx---\nyz--");
    /// ```
    pub fn join_vertically(&self, other: &CharGrid, padding: Option<char>) -> CharGrid {
        let width = self.width().max(other.width());
        let appended = other.rows().map(|row| match padding {
            Some(fill) => padded_row(row, width, fill),
            None => row.to_vec(),
        });
        self.rows().map(<[char]>::to_vec).chain(appended).collect()
    }

    /// Bracket every row of this grid between a leading and a trailing grid.
    ///
    /// The result is as tall as the tallest of the three. A cap that runs out
    /// of rows contributes `error_glyph` repeated to its width, so misaligned
    /// caps show up in the output. Missing content rows are blank.
    ///
    /// ```rust
    /// use textcore::CharGrid;
    ///
    /// let content = CharGrid::parse("ab\ncd\nef");
    /// let leading = CharGrid::parse("[\n[");
    /// let trailing = CharGrid::parse("]\n]\n]");
    ///
    /// assert_eq!(
    ///     content.join_with_caps(&leading, &trailing, '!').render(),
    ///     "[ab]\n[cd]\n!ef]"
    /// );
    /// ```
    pub fn join_with_caps(
        &self,
        leading: &CharGrid,
        trailing: &CharGrid,
        error_glyph: char,
    ) -> CharGrid {
        let height = self.height().max(leading.height()).max(trailing.height());
        (0..height)
            .map(|index| {
                let mut row = filled_row(leading, index, error_glyph);
                row.extend(filled_row(self, index, ' '));
                row.extend(filled_row(trailing, index, error_glyph));
                row
            })
            .collect()
    }

    /// Repeat this grid side by side `count` times.
    ///
    /// Equivalent to joining the grid horizontally onto the empty grid
    /// `count` times without padding; zero repetitions give the empty grid.
    ///
    /// ```rust
    /// use textcore::CharGrid;
    ///
    /// let tile = CharGrid::parse("/\\\n\\/");
    /// assert_eq!(tile.repeated(3).render(), "/\\/\\/\\\n\\/\\/\\/");
    /// assert_eq!(tile.repeated(0), CharGrid::new());
    /// ```
    pub fn repeated(&self, count: usize) -> CharGrid {
        (0..count).fold(CharGrid::new(), |acc, _| acc.join_horizontally(self, None))
    }
}

/// Row `index` of `grid`, synthesized from `padding` when the grid is too short.
fn side_row(grid: &CharGrid, index: usize, padding: Option<char>) -> Vec<char> {
    match padding {
        Some(fill) if index >= grid.height() => vec![fill; grid.width()],
        _ => grid.row(index).to_vec(),
    }
}

/// Row `index` of `grid`, or `fill` repeated to the grid width when missing.
fn filled_row(grid: &CharGrid, index: usize, fill: char) -> Vec<char> {
    if index < grid.height() {
        grid.row(index).to_vec()
    } else {
        vec![fill; grid.width()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_join_of_equal_heights() {
        let left = CharGrid::parse("ab\ncd");
        let right = CharGrid::parse("12\n34");
        assert_eq!(left.join_horizontally(&right, None).render(), "ab12\ncd34");
    }

    #[test]
    fn horizontal_join_does_not_mutate_inputs() {
        let left = CharGrid::parse("ab");
        let right = CharGrid::parse("1\n2");
        let _ = left.join_horizontally(&right, Some('.'));
        assert_eq!(left.render(), "ab");
        assert_eq!(right.render(), "1\n2");
    }

    #[test]
    fn horizontal_join_pads_missing_left_rows_to_left_width() {
        let left = CharGrid::parse("abc");
        let right = CharGrid::parse("1\n2\n3");
        let joined = left.join_horizontally(&right, Some(' '));
        assert_eq!(joined.render(), "abc1\n   2\n   3");
        assert_eq!(joined.width(), 4);
    }

    #[test]
    fn horizontal_join_with_empty_grid() {
        let grid = CharGrid::parse("ab\ncd");
        assert_eq!(grid.join_horizontally(&CharGrid::new(), None), grid);
        assert_eq!(CharGrid::new().join_horizontally(&grid, Some('x')), grid);
    }

    #[test]
    fn horizontal_join_keeps_ragged_rows_without_padding() {
        let left = CharGrid::parse("a\nbcd");
        let right = CharGrid::parse("1\n2");
        assert_eq!(left.join_horizontally(&right, None).render(), "a1\nbcd2");
    }

    #[test]
    fn vertical_join_stacks_rows() {
        let top = CharGrid::parse("ab");
        let bottom = CharGrid::parse("cd\nef");
        let joined = top.join_vertically(&bottom, None);
        assert_eq!(joined.height(), 3);
        assert_eq!(joined.render(), "ab\ncd\nef");
    }

    #[test]
    fn vertical_join_pads_to_wider_grid() {
        let top = CharGrid::parse("a");
        let bottom = CharGrid::parse("bcd\ne");
        let joined = top.join_vertically(&bottom, Some('_'));
        assert_eq!(joined.render(), "a\nbcd\ne__");
    }

    #[test]
    fn caps_mark_missing_rows_with_error_glyph() {
        let content = CharGrid::parse("x\ny");
        let leading = CharGrid::parse("<<");
        let trailing = CharGrid::new();
        let joined = content.join_with_caps(&leading, &trailing, '!');
        assert_eq!(joined.render(), "<<x\n!!y");
    }

    #[test]
    fn caps_blank_missing_content_rows() {
        let content = CharGrid::parse("abc");
        let side = CharGrid::parse("|\n|");
        let joined = content.join_with_caps(&side, &side, '!');
        assert_eq!(joined.render(), "|abc|\n|   |");
    }

    #[test]
    fn repeated_multiplies_width() {
        let grid = CharGrid::parse("ab\nc");
        let tiled = grid.repeated(4);
        assert_eq!(tiled.width(), 8);
        assert_eq!(tiled.height(), 2);
        assert_eq!(tiled.render(), "abababab\ncccc");
    }

    #[test]
    fn repeated_once_is_identity() {
        let grid = CharGrid::parse("ab\ncd");
        assert_eq!(grid.repeated(1), grid);
    }
}
