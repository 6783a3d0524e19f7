//! Line padding options and YAML presets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::layout::LineLayout;
use super::types::{Alignment, LineCaps, Measure};
use crate::error::Result;

/// Options for rendering text into a fixed-width line.
///
/// A `PadLine` holds everything except the text itself, so one value can pad
/// many lines the same way. Options are set with consuming builder methods.
///
/// # Example
///
/// ```rust
/// use textcore::{LineCaps, PadLine};
///
/// let padder = PadLine::new(32)
///     .glyph('░')
///     .caps(LineCaps::new("//", "//"));
///
/// let line = padder.pad("Example title");
/// assert_eq!(line.chars().count(), 32);
/// assert!(line.starts_with("//░"));
/// ```
///
/// Presets can be loaded from YAML. Missing keys take their defaults:
///
/// ```rust
/// use textcore::{Alignment, PadLine};
///
/// let padder = PadLine::from_yaml(r#"
/// width: 20
/// glyph: "="
/// alignment: trailing
/// caps:
///   leading: "["
///   trailing: "]"
/// "#).unwrap();
///
/// assert_eq!(padder.alignment, Alignment::Trailing);
/// assert_eq!(padder.pad("end"), "[==============end=]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadLine {
    /// Target width of the rendered line.
    pub width: usize,
    /// Filler glyph, also used for cap and text spacing.
    pub glyph: char,
    /// Placement of filler for single-segment lines.
    pub alignment: Alignment,
    /// Character that splits text into independently spaced segments.
    pub split_marker: char,
    /// Optional brackets at both ends of the line.
    pub caps: Option<LineCaps>,
    /// Separate the text from the filler with one glyph on each facing side.
    pub space_around_text: bool,
    /// Keep empty segments produced by leading, trailing, or doubled markers.
    pub keep_empty_segments: bool,
    /// How text and cap widths are counted.
    pub measure: Measure,
}

impl Default for PadLine {
    fn default() -> Self {
        PadLine {
            width: 0,
            glyph: ' ',
            alignment: Alignment::Center,
            split_marker: '@',
            caps: None,
            space_around_text: true,
            keep_empty_segments: false,
            measure: Measure::Chars,
        }
    }
}

impl PadLine {
    /// Padding options for the given target width, all else default.
    pub fn new(width: usize) -> Self {
        PadLine {
            width,
            ..PadLine::default()
        }
    }

    /// Load options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize these options to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Set the target width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the filler glyph.
    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set the alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the split marker.
    pub fn split_marker(mut self, marker: char) -> Self {
        self.split_marker = marker;
        self
    }

    /// Set the caps.
    pub fn caps(mut self, caps: LineCaps) -> Self {
        self.caps = Some(caps);
        self
    }

    /// Remove any caps.
    pub fn no_caps(mut self) -> Self {
        self.caps = None;
        self
    }

    /// Enable or disable the spacing glyphs around text.
    pub fn space_around_text(mut self, enable: bool) -> Self {
        self.space_around_text = enable;
        self
    }

    /// Enable or disable retention of empty segments.
    pub fn keep_empty_segments(mut self, enable: bool) -> Self {
        self.keep_empty_segments = enable;
        self
    }

    /// Set the width measure.
    pub fn measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Compute the layout of `text` without rendering it.
    pub fn layout(&self, text: &str) -> LineLayout {
        LineLayout::plan(self, text)
    }

    /// Render `text` as a padded line.
    pub fn pad(&self, text: &str) -> String {
        self.layout(text).render()
    }
}

/// Render one padded line.
///
/// Empty segments are dropped and widths are counted in chars; use
/// [`PadLine`] to change either.
///
/// The result is exactly `width` long unless the fixed content (text, caps
/// and spacing glyphs) is already wider, in which case nothing is truncated
/// and the line overflows.
///
/// ```rust
/// use textcore::{pad_line, Alignment};
///
/// let line = pad_line("Split ->@<- Split", '░', 41, Alignment::Center, '@', None, true);
/// assert_eq!(line.chars().count(), 41);
/// assert!(line.starts_with("Split ->░"));
/// assert!(line.ends_with("░<- Split"));
/// ```
pub fn pad_line(
    text: &str,
    glyph: char,
    width: usize,
    alignment: Alignment,
    split_marker: char,
    caps: Option<&LineCaps>,
    space_around_text: bool,
) -> String {
    PadLine {
        width,
        glyph,
        alignment,
        split_marker,
        caps: caps.cloned(),
        space_around_text,
        ..PadLine::default()
    }
    .pad(text)
}
