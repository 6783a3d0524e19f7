//! Value types for line padding: alignment, caps, and width measure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::TextCoreError;

/// Where leftover filler goes when a line has a single segment.
///
/// Lines with split markers ignore alignment: their filler always goes
/// into the gaps between segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Text at the start, filler after it.
    Leading,
    /// Filler on both sides, the odd unit going to the right.
    #[default]
    Center,
    /// Filler before the text, text at the end.
    Trailing,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alignment::Leading => "leading",
            Alignment::Center => "center",
            Alignment::Trailing => "trailing",
        };
        f.write_str(name)
    }
}

impl FromStr for Alignment {
    type Err = TextCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leading" | "left" => Ok(Alignment::Leading),
            "center" | "centre" => Ok(Alignment::Center),
            "trailing" | "right" => Ok(Alignment::Trailing),
            _ => Err(TextCoreError::InvalidAlignment(s.to_string())),
        }
    }
}

/// Bracket strings placed at the very ends of a padded line.
///
/// # Example
///
/// ```rust
/// use textcore::{LineCaps, PadLine};
///
/// let line = PadLine::new(12)
///     .glyph('-')
///     .caps(LineCaps::new("[", "]"))
///     .pad("ok");
/// assert_eq!(line, "[----ok----]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCaps {
    /// Glyphs at the start of the line.
    pub leading: String,
    /// Glyphs at the end of the line.
    pub trailing: String,
    /// Insert one filler glyph between each cap and the padded body.
    #[serde(default = "default_extra_spaces")]
    pub has_extra_spaces: bool,
}

fn default_extra_spaces() -> bool {
    true
}

impl LineCaps {
    /// Caps with extra spaces enabled.
    pub fn new(leading: impl Into<String>, trailing: impl Into<String>) -> Self {
        LineCaps {
            leading: leading.into(),
            trailing: trailing.into(),
            has_extra_spaces: true,
        }
    }

    /// Caps that sit directly against the padded body.
    pub fn tight(leading: impl Into<String>, trailing: impl Into<String>) -> Self {
        LineCaps {
            has_extra_spaces: false,
            ..LineCaps::new(leading, trailing)
        }
    }

    /// Set whether a filler glyph separates each cap from the body.
    pub fn extra_spaces(mut self, enable: bool) -> Self {
        self.has_extra_spaces = enable;
        self
    }
}

/// How the width of text is counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// One unit per `char`.
    #[default]
    Chars,
    /// Terminal display columns; wide CJK glyphs count as two.
    Columns,
}

impl Measure {
    /// Width of `s` under this measure.
    pub fn width(self, s: &str) -> usize {
        match self {
            Measure::Chars => s.chars().count(),
            Measure::Columns => s.width(),
        }
    }
}

impl FromStr for Measure {
    type Err = TextCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chars" => Ok(Measure::Chars),
            "columns" | "cols" => Ok(Measure::Columns),
            _ => Err(TextCoreError::InvalidMeasure(s.to_string())),
        }
    }
}
