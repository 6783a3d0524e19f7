//! The padding engine: segmenting, measuring, and distributing filler.
//!
//! A line is planned in two steps. [`PadLine::layout`](super::PadLine::layout)
//! computes a [`LineLayout`] (which segments survive, how wide the fixed
//! content is, and where every filler glyph goes) and
//! [`LineLayout::render`] turns that plan into the final string.

use super::options::PadLine;
use super::types::Alignment;

/// Where the available filler is placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Single segment: filler before and after the text.
    Sides { left: usize, right: usize },
    /// Several segments: filler in each gap, left to right.
    Gaps(Vec<usize>),
}

impl Fill {
    /// Total filler glyphs placed by this distribution.
    pub fn total(&self) -> usize {
        match self {
            Fill::Sides { left, right } => left + right,
            Fill::Gaps(gaps) => gaps.iter().sum(),
        }
    }
}

/// A fully computed plan for one padded line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineLayout {
    segments: Vec<String>,
    glyph: char,
    alignment: Alignment,
    leading_cap: String,
    trailing_cap: String,
    cap_spaces: bool,
    text_spaces: bool,
    content_width: usize,
    fixed_width: usize,
    available: usize,
    fill: Fill,
}

impl LineLayout {
    pub(crate) fn plan(options: &PadLine, text: &str) -> Self {
        let segments = split_segments(text, options.split_marker, options.keep_empty_segments);
        let measure = options.measure;

        let content_width: usize = segments.iter().map(|s| measure.width(s)).sum();

        let (leading_cap, trailing_cap, cap_spaces) = match &options.caps {
            Some(caps) => (
                caps.leading.clone(),
                caps.trailing.clone(),
                caps.has_extra_spaces,
            ),
            None => (String::new(), String::new(), false),
        };

        let cap_units = if cap_spaces { 2 } else { 0 };
        let text_units = if options.space_around_text {
            text_space_units(segments.len(), options.alignment)
        } else {
            0
        };

        let fixed_width = content_width
            + measure.width(&leading_cap)
            + measure.width(&trailing_cap)
            + cap_units
            + text_units;
        let available = options.width.saturating_sub(fixed_width);

        let fill = if segments.len() <= 1 {
            let (left, right) = distribute_sides(available, options.alignment);
            Fill::Sides { left, right }
        } else {
            Fill::Gaps(distribute_gaps(available, segments.len() - 1))
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            segments = segments.len(),
            content_width,
            fixed_width,
            available,
            "planned padded line"
        );

        LineLayout {
            segments,
            glyph: options.glyph,
            alignment: options.alignment,
            leading_cap,
            trailing_cap,
            cap_spaces,
            text_spaces: options.space_around_text,
            content_width,
            fixed_width,
            available,
            fill,
        }
    }

    /// Segments retained after splitting on the marker.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Combined width of the retained segments.
    pub fn content_width(&self) -> usize {
        self.content_width
    }

    /// Width of everything that is not alignment filler.
    pub fn fixed_width(&self) -> usize {
        self.fixed_width
    }

    /// Filler glyphs left over after the fixed content, never negative.
    pub fn available(&self) -> usize {
        self.available
    }

    /// How the available filler is distributed.
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Assemble the padded line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.fixed_width + self.available);
        out.push_str(&self.leading_cap);
        if self.cap_spaces {
            out.push(self.glyph);
        }

        match &self.fill {
            Fill::Sides { left, right } => {
                let (space_before, space_after) = if self.text_spaces {
                    match self.alignment {
                        Alignment::Leading => (false, true),
                        Alignment::Trailing => (true, false),
                        Alignment::Center => (true, true),
                    }
                } else {
                    (false, false)
                };
                self.push_glyphs(&mut out, *left);
                if space_before {
                    out.push(self.glyph);
                }
                if let Some(segment) = self.segments.first() {
                    out.push_str(segment);
                }
                if space_after {
                    out.push(self.glyph);
                }
                self.push_glyphs(&mut out, *right);
            }
            Fill::Gaps(gaps) => {
                for (index, segment) in self.segments.iter().enumerate() {
                    out.push_str(segment);
                    if let Some(&gap) = gaps.get(index) {
                        if self.text_spaces {
                            out.push(self.glyph);
                        }
                        self.push_glyphs(&mut out, gap);
                        if self.text_spaces {
                            out.push(self.glyph);
                        }
                    }
                }
            }
        }

        if self.cap_spaces {
            out.push(self.glyph);
        }
        out.push_str(&self.trailing_cap);
        out
    }

    fn push_glyphs(&self, out: &mut String, count: usize) {
        out.extend(std::iter::repeat(self.glyph).take(count));
    }
}

/// Split `text` on `marker`, dropping empty pieces unless `keep_empty` is set.
///
/// Always yields at least one segment: text that splits into nothing is
/// treated as a single empty segment.
pub(crate) fn split_segments(text: &str, marker: char, keep_empty: bool) -> Vec<String> {
    let mut segments: Vec<String> = text
        .split(marker)
        .filter(|s| keep_empty || !s.is_empty())
        .map(str::to_string)
        .collect();
    if segments.is_empty() {
        segments.push(String::new());
    }
    segments
}

/// Text-space glyphs placed around the content.
///
/// A single segment gets one per side that faces filler; several segments
/// get one on each side of every gap.
fn text_space_units(segments: usize, alignment: Alignment) -> usize {
    if segments > 1 {
        return 2 * (segments - 1);
    }
    match alignment {
        Alignment::Leading | Alignment::Trailing => 1,
        Alignment::Center => 2,
    }
}

/// Split `available` filler into `(left, right)` for a single segment.
///
/// Centered text gets the smaller half on the left.
///
/// ```rust
/// use textcore::{distribute_sides, Alignment};
///
/// assert_eq!(distribute_sides(7, Alignment::Leading), (0, 7));
/// assert_eq!(distribute_sides(7, Alignment::Trailing), (7, 0));
/// assert_eq!(distribute_sides(7, Alignment::Center), (3, 4));
/// ```
pub fn distribute_sides(available: usize, alignment: Alignment) -> (usize, usize) {
    match alignment {
        Alignment::Leading => (0, available),
        Alignment::Trailing => (available, 0),
        Alignment::Center => {
            let left = available / 2;
            (left, available - left)
        }
    }
}

/// Spread `available` filler over `gaps` gaps.
///
/// Each gap gets `available / gaps`; the first `available % gaps` gaps get
/// one extra. Zero gaps yields an empty distribution.
///
/// ```rust
/// use textcore::distribute_gaps;
///
/// assert_eq!(distribute_gaps(11, 3), vec![4, 4, 3]);
/// assert_eq!(distribute_gaps(2, 4), vec![1, 1, 0, 0]);
/// ```
pub fn distribute_gaps(available: usize, gaps: usize) -> Vec<usize> {
    if gaps == 0 {
        return Vec::new();
    }
    let per_gap = available / gaps;
    let remainder = available % gaps;
    (0..gaps)
        .map(|index| per_gap + usize::from(index < remainder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::types::LineCaps;

    #[test]
    fn split_without_marker_is_one_segment() {
        assert_eq!(split_segments("hello", '@', false), vec!["hello"]);
    }

    #[test]
    fn split_drops_empty_segments_by_default() {
        assert_eq!(split_segments("@a@@b@", '@', false), vec!["a", "b"]);
    }

    #[test]
    fn split_keeps_empty_segments_when_asked() {
        assert_eq!(
            split_segments("@a@@b", '@', true),
            vec!["", "a", "", "b"]
        );
    }

    #[test]
    fn split_of_only_markers_is_single_empty_segment() {
        assert_eq!(split_segments("@@", '@', false), vec![""]);
        assert_eq!(split_segments("", '@', false), vec![""]);
    }

    #[test]
    fn gaps_remainder_goes_left() {
        assert_eq!(distribute_gaps(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(distribute_gaps(0, 3), vec![0, 0, 0]);
        assert!(distribute_gaps(5, 0).is_empty());
    }

    #[test]
    fn center_puts_odd_unit_right() {
        assert_eq!(distribute_sides(0, Alignment::Center), (0, 0));
        assert_eq!(distribute_sides(1, Alignment::Center), (0, 1));
        assert_eq!(distribute_sides(6, Alignment::Center), (3, 3));
    }

    #[test]
    fn layout_counts_text_spaces_per_alignment() {
        let leading = PadLine::new(10).align(Alignment::Leading).layout("abc");
        assert_eq!(leading.fixed_width(), 4);
        let center = PadLine::new(10).layout("abc");
        assert_eq!(center.fixed_width(), 5);
        let trailing = PadLine::new(10).align(Alignment::Trailing).layout("abc");
        assert_eq!(trailing.fixed_width(), 4);
    }

    #[test]
    fn layout_counts_caps_and_cap_spaces() {
        let layout = PadLine::new(20)
            .caps(LineCaps::new("<<", ">"))
            .space_around_text(false)
            .layout("abc");
        assert_eq!(layout.fixed_width(), 3 + 2 + 1 + 2);
        assert_eq!(layout.available(), 12);
    }

    #[test]
    fn layout_multi_segment_spaces_every_gap() {
        let layout = PadLine::new(20).layout("a@b@c");
        // three letters plus two spaces around each of the two gaps
        assert_eq!(layout.fixed_width(), 3 + 4);
        assert_eq!(layout.fill(), &Fill::Gaps(vec![7, 6]));
    }

    #[test]
    fn layout_clamps_available_at_zero() {
        let layout = PadLine::new(3).layout("too long");
        assert_eq!(layout.available(), 0);
        assert_eq!(layout.fill().total(), 0);
    }

    #[test]
    fn render_leading_places_space_after_text() {
        let line = PadLine::new(8).glyph('.').align(Alignment::Leading).pad("ab");
        assert_eq!(line, "ab......");
        let layout = PadLine::new(8).glyph('.').align(Alignment::Leading).layout("ab");
        assert_eq!(layout.fill(), &Fill::Sides { left: 0, right: 5 });
    }

    #[test]
    fn render_keeps_glyph_uniform() {
        let line = PadLine::new(11)
            .glyph('~')
            .caps(LineCaps::new("|", "|"))
            .pad("mid");
        assert_eq!(line, "|~~~mid~~~|");
    }
}
