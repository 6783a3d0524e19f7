use std::fmt;

/// A ragged grid of characters.
///
/// Rows may have different lengths. [`width`](CharGrid::width) is the length
/// of the longest row and [`height`](CharGrid::height) the number of rows;
/// both are computed from the rows on every call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharGrid {
    rows: Vec<Vec<char>>,
}

impl CharGrid {
    /// The empty grid: no rows.
    pub fn new() -> Self {
        CharGrid { rows: Vec::new() }
    }

    /// Build a grid from explicit rows.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        CharGrid { rows }
    }

    /// Build a grid with one row per line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect()
    }

    /// Build a grid by splitting `text` on `\n`.
    ///
    /// Empty lines become zero-width rows, including a trailing one when the
    /// text ends with a newline, so [`render`](CharGrid::render) gives back
    /// the original text.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when there are no rows or every row is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// The row at `index`, or an empty row when out of bounds.
    pub fn row(&self, index: usize) -> &[char] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The row at `index` as a string.
    pub fn row_string(&self, index: usize) -> String {
        self.row(index).iter().collect()
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Add a row at the bottom.
    pub fn append(&mut self, row: Vec<char>) {
        self.rows.push(row);
    }

    /// Add a line of text as a row at the bottom.
    pub fn append_line(&mut self, line: &str) {
        self.rows.push(line.chars().collect());
    }

    /// Replace the row at `index`.
    ///
    /// Writing one past the last row appends. Any other out-of-range index
    /// leaves the grid untouched and returns `false`.
    pub fn set_row(&mut self, index: usize, row: Vec<char>) -> bool {
        match index.cmp(&self.rows.len()) {
            std::cmp::Ordering::Less => {
                self.rows[index] = row;
                true
            }
            std::cmp::Ordering::Equal => {
                self.rows.push(row);
                true
            }
            std::cmp::Ordering::Greater => false,
        }
    }

    /// Right-pad every row with `fill` up to the grid width.
    pub fn pad_width(&self, fill: char) -> CharGrid {
        self.pad_width_to(self.width(), fill)
    }

    /// Right-pad every row with `fill` up to `width`; longer rows are kept.
    pub fn pad_width_to(&self, width: usize, fill: char) -> CharGrid {
        self.rows
            .iter()
            .map(|row| padded_row(row, width, fill))
            .collect()
    }

    /// Add rows of `fill` at the bottom until the grid is `height` rows tall.
    ///
    /// New rows are as wide as the grid. A grid already at least `height`
    /// tall is returned unchanged.
    pub fn pad_height(&self, height: usize, fill: char) -> CharGrid {
        let width = self.width();
        let mut grid = self.clone();
        while grid.height() < height {
            grid.append(vec![fill; width]);
        }
        grid
    }

    /// Join the rows with `\n`.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.rows.iter().map(|row| row.iter().collect()).collect();
        lines.join("\n")
    }
}

/// Copy `row` and extend it with `fill` up to `width`.
pub(crate) fn padded_row(row: &[char], width: usize, fill: char) -> Vec<char> {
    let mut out = Vec::with_capacity(width.max(row.len()));
    out.extend_from_slice(row);
    out.resize(width.max(row.len()), fill);
    out
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for CharGrid {
    fn from(text: &str) -> Self {
        CharGrid::parse(text)
    }
}

impl From<Vec<Vec<char>>> for CharGrid {
    fn from(rows: Vec<Vec<char>>) -> Self {
        CharGrid::from_rows(rows)
    }
}

impl<const W: usize, const H: usize> From<[[char; W]; H]> for CharGrid {
    fn from(rows: [[char; W]; H]) -> Self {
        rows.into_iter().map(Vec::from).collect()
    }
}

impl FromIterator<Vec<char>> for CharGrid {
    fn from_iter<T: IntoIterator<Item = Vec<char>>>(iter: T) -> Self {
        CharGrid {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CharGrid {
    type Item = &'a Vec<char>;
    type IntoIter = std::slice::Iter<'a, Vec<char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
