//! Word wrapping into fixed-width, filler-padded lines, and block indentation.
//!
//! ```rust
//! use textcore::{reflow, ReflowOptions};
//!
//! let lines = reflow("the quick brown fox", 10, &ReflowOptions::default());
//! assert_eq!(lines, vec!["the quick ", "brown fox "]);
//! ```

use serde::{Deserialize, Serialize};

/// How words longer than the line width are broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wrapping {
    /// Cut the word at the line width.
    #[default]
    Wrap,
    /// Cut one char early and end the piece with `-`.
    Hyphenate,
}

/// Options for [`reflow`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowOptions {
    /// Keep at most this many lines.
    pub max_lines: Option<usize>,
    /// Glyph used to pad each line to the width.
    pub fill: char,
    /// Long-word breaking strategy.
    pub wrapping: Wrapping,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        ReflowOptions {
            max_lines: None,
            fill: ' ',
            wrapping: Wrapping::Wrap,
        }
    }
}

impl ReflowOptions {
    /// Limit the number of output lines.
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Set the padding glyph.
    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Set the long-word strategy.
    pub fn wrapping(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = wrapping;
        self
    }
}

/// Wrap `text` into lines of exactly `width` chars.
///
/// Each `\n`-separated paragraph is wrapped on its own; an empty paragraph
/// becomes a line of fill. Words are separated by spaces, and a word that
/// does not fit on its own line is broken according to
/// [`ReflowOptions::wrapping`].
///
/// A zero width produces no lines.
///
/// ```rust
/// use textcore::{reflow, ReflowOptions, Wrapping};
///
/// let options = ReflowOptions::default().fill('.').wrapping(Wrapping::Hyphenate);
/// assert_eq!(
///     reflow("a supercalifragilistic word", 8, &options),
///     vec!["a.......", "superca-", "lifragi-", "listic..", "word...."]
/// );
/// ```
pub fn reflow(text: &str, width: usize, options: &ReflowOptions) -> Vec<String> {
    if width == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("reflow called with zero width");
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        reflow_paragraph(paragraph, width, options, &mut lines);
    }

    if let Some(max) = options.max_lines {
        lines.truncate(max);
    }
    lines
}

fn reflow_paragraph(paragraph: &str, width: usize, options: &ReflowOptions, out: &mut Vec<String>) {
    if paragraph.is_empty() {
        out.push(fill_to(String::new(), width, options.fill));
        return;
    }

    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        let word_len = word.chars().count();

        if current.is_empty() && word_len <= width {
            current.push_str(word);
            current_len = word_len;
        } else if !current.is_empty() && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            if !current.is_empty() {
                out.push(fill_to(std::mem::take(&mut current), width, options.fill));
            }
            if word_len > width {
                let mut pieces = break_word(word, width, options.wrapping);
                current = pieces.pop().unwrap_or_default();
                out.extend(pieces);
            } else {
                current = word.to_string();
            }
            current_len = current.chars().count();
        }
    }

    if !current.is_empty() {
        out.push(fill_to(current, width, options.fill));
    }
}

/// Break a long word into pieces no wider than `width`.
fn break_word(word: &str, width: usize, wrapping: Wrapping) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let hyphenate = wrapping == Wrapping::Hyphenate && width >= 2;
    let step = if hyphenate { width - 1 } else { width };

    let mut pieces = Vec::new();
    let mut rest = chars.as_slice();
    while rest.len() > width {
        let (head, tail) = rest.split_at(step);
        let mut piece: String = head.iter().collect();
        if hyphenate {
            piece.push('-');
        }
        pieces.push(piece);
        rest = tail;
    }
    pieces.push(rest.iter().collect());
    pieces
}

fn fill_to(mut line: String, width: usize, fill: char) -> String {
    let len = line.chars().count();
    line.extend(std::iter::repeat(fill).take(width.saturating_sub(len)));
    line
}

/// Prefix every line of `text` with `indent` repeated `level` times.
///
/// Empty lines are indented too, and line breaks are normalized to `\n`.
///
/// ```rust
/// use textcore::indent_lines;
///
/// assert_eq!(indent_lines("a\n\nb", 2, "  "), "    a\n    \n    b");
/// ```
pub fn indent_lines(text: &str, level: usize, indent: &str) -> String {
    let prefix = indent.repeat(level);
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            format!("{prefix}{line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_yields_nothing() {
        assert!(reflow("anything", 0, &ReflowOptions::default()).is_empty());
    }

    #[test]
    fn lines_are_padded_to_width() {
        let lines = reflow("one two three", 9, &ReflowOptions::default().fill('_'));
        assert_eq!(lines, vec!["one two__", "three____"]);
    }

    #[test]
    fn exact_fit_has_no_padding() {
        let lines = reflow("abc def", 7, &ReflowOptions::default());
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn empty_paragraph_is_a_fill_line() {
        let lines = reflow("ab\n\ncd", 4, &ReflowOptions::default().fill('.'));
        assert_eq!(lines, vec!["ab..", "....", "cd.."]);
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let lines = reflow("ab\r\ncd", 3, &ReflowOptions::default());
        assert_eq!(lines, vec!["ab ", "cd "]);
    }

    #[test]
    fn space_runs_collapse() {
        let lines = reflow("a    b", 5, &ReflowOptions::default());
        assert_eq!(lines, vec!["a b  "]);
    }

    #[test]
    fn paragraph_of_spaces_produces_no_lines() {
        assert!(reflow("   ", 5, &ReflowOptions::default()).is_empty());
    }

    #[test]
    fn long_word_wraps_at_width() {
        let lines = reflow("abcdefghij", 4, &ReflowOptions::default());
        assert_eq!(lines, vec!["abcd", "efgh", "ij  "]);
    }

    #[test]
    fn long_word_tail_continues_line() {
        let lines = reflow("abcdefg hi", 5, &ReflowOptions::default());
        assert_eq!(lines, vec!["abcde", "fg hi"]);
    }

    #[test]
    fn hyphenate_falls_back_to_wrap_when_narrow() {
        let options = ReflowOptions::default().wrapping(Wrapping::Hyphenate);
        assert_eq!(reflow("abc", 1, &options), vec!["a", "b", "c"]);
    }

    #[test]
    fn max_lines_truncates() {
        let options = ReflowOptions::default().max_lines(2);
        let lines = reflow("a b c d e f", 1, &options);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ReflowOptions = serde_yaml::from_str("wrapping: hyphenate").unwrap();
        assert_eq!(options.wrapping, Wrapping::Hyphenate);
        assert_eq!(options.fill, ' ');
        assert_eq!(options.max_lines, None);
    }

    #[test]
    fn indent_zero_level_is_identity() {
        assert_eq!(indent_lines("a\nb", 0, "\t"), "a\nb");
    }

    #[test]
    fn indent_handles_crlf_and_empty_text() {
        assert_eq!(indent_lines("a\r\nb", 1, "> "), "> a\n> b");
        assert_eq!(indent_lines("", 1, "--"), "--");
    }
}
