//! Bordered panels assembled from padded lines.
//!
//! A [`Panel`] pads each line with a [`PadLine`], stacks the results into a
//! [`CharGrid`], and draws a border around them using grid joins only.
//!
//! # Example
//!
//! ```rust
//! use textcore::{Alignment, BorderStyle, PadLine, Panel};
//!
//! let panel = Panel::new(PadLine::new(9).align(Alignment::Leading))
//!     .border(BorderStyle::Ascii)
//!     .title("todo");
//!
//! let grid = panel.render(&["milk", "eggs"]);
//! assert_eq!(
//!     grid.render(),
//!     "+---------+\n\
//!      |  todo   |\n\
//!      +---------+\n\
//!      |milk     |\n\
//!      |eggs     |\n\
//!      +---------+"
//! );
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::chargrid::CharGrid;
use crate::error::TextCoreError;
use crate::pad::{Alignment, Measure, PadLine};

/// Frame drawn around a [`Panel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No frame; the padded lines only.
    #[default]
    None,
    /// `+`, `-` and `|`.
    Ascii,
    /// Thin box-drawing lines.
    Light,
    /// Thick box-drawing lines.
    Heavy,
    /// Doubled box-drawing lines.
    Double,
    /// Thin lines with arc corners.
    Rounded,
}

impl BorderStyle {
    fn chars(&self) -> Option<BorderChars> {
        // horizontal, vertical, four corners clockwise from top left, left tee, right tee
        let set = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => "-|++++++",
            BorderStyle::Light => "─│┌┐┘└├┤",
            BorderStyle::Heavy => "━┃┏┓┛┗┣┫",
            BorderStyle::Double => "═║╔╗╝╚╠╣",
            BorderStyle::Rounded => "─│╭╮╯╰├┤",
        };
        BorderChars::from_set(set)
    }
}

impl FromStr for BorderStyle {
    type Err = TextCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "ascii" => Ok(BorderStyle::Ascii),
            "light" => Ok(BorderStyle::Light),
            "heavy" => Ok(BorderStyle::Heavy),
            "double" => Ok(BorderStyle::Double),
            "rounded" => Ok(BorderStyle::Rounded),
            _ => Err(TextCoreError::InvalidBorder(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_right: char,
    bottom_left: char,
    left_tee: char,
    right_tee: char,
}

impl BorderChars {
    fn from_set(set: &str) -> Option<Self> {
        let glyphs: Vec<char> = set.chars().collect();
        let &[horizontal, vertical, top_left, top_right, bottom_right, bottom_left, left_tee, right_tee] =
            glyphs.as_slice()
        else {
            return None;
        };
        Some(BorderChars {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            left_tee,
            right_tee,
        })
    }

    fn rule(&self, left: char, right: char, width: usize) -> CharGrid {
        let mut row = Vec::with_capacity(width + 2);
        row.push(left);
        row.extend(std::iter::repeat(self.horizontal).take(width));
        row.push(right);
        CharGrid::from_rows(vec![row])
    }

    fn wall(&self, height: usize) -> CharGrid {
        CharGrid::from_rows(vec![vec![self.vertical]; height])
    }
}

/// A block of padded lines with an optional border and title.
#[derive(Clone, Debug)]
pub struct Panel {
    padder: PadLine,
    border: BorderStyle,
    title: Option<String>,
}

impl Panel {
    /// Create a borderless panel whose lines are padded by `padder`.
    pub fn new(padder: PadLine) -> Self {
        Panel {
            padder,
            border: BorderStyle::None,
            title: None,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set a title, rendered centered above the body.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the border style.
    pub fn get_border(&self) -> BorderStyle {
        self.border
    }

    /// Pad every line and assemble the panel.
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> CharGrid {
        let body = CharGrid::from_lines(lines.iter().map(|line| self.padder.pad(line.as_ref())));
        let header = self.title.as_ref().map(|title| {
            let centered = self.padder.clone().align(Alignment::Center);
            CharGrid::from_lines([centered.pad(title)])
        });

        // Overflowing lines make the body ragged; square it off so the
        // right-hand wall stays straight. Widths use the padder's measure so
        // wide glyphs line up too.
        let measure = self.padder.measure;
        let width = measured_width(&body, measure)
            .max(header.as_ref().map_or(0, |header| measured_width(header, measure)))
            .max(self.padder.width);
        let glyph = self.padder.glyph;
        let body = square_off(&body, width, measure, glyph);
        let header = header.map(|header| square_off(&header, width, measure, glyph));

        let Some(chars) = self.border.chars() else {
            return match header {
                Some(header) => header.join_vertically(&body, None),
                None => body,
            };
        };

        let mut panel = chars.rule(chars.top_left, chars.top_right, width);
        if let Some(header) = header {
            let wall = chars.wall(header.height());
            panel = panel
                .join_vertically(&header.join_with_caps(&wall, &wall, '!'), None)
                .join_vertically(&chars.rule(chars.left_tee, chars.right_tee, width), None);
        }
        let wall = chars.wall(body.height());
        panel
            .join_vertically(&body.join_with_caps(&wall, &wall, '!'), None)
            .join_vertically(&chars.rule(chars.bottom_left, chars.bottom_right, width), None)
    }
}

/// Widest row of `grid` under `measure`.
fn measured_width(grid: &CharGrid, measure: Measure) -> usize {
    grid.rows()
        .map(|row| measure.width(&row.iter().collect::<String>()))
        .max()
        .unwrap_or(0)
}

/// Right-pad every row with `fill` until it measures `width`.
fn square_off(grid: &CharGrid, width: usize, measure: Measure, fill: char) -> CharGrid {
    grid.rows()
        .map(|row| {
            let line: String = row.iter().collect();
            let short = width.saturating_sub(measure.width(&line));
            let mut squared = row.to_vec();
            squared.extend(std::iter::repeat(fill).take(short));
            squared
        })
        .collect()
}
