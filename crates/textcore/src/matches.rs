//! Locating regex matches as ranges.
//!
//! All ranges are byte offsets into the searched text unless stated
//! otherwise, so they can slice the text directly. Matches are reported in
//! order and never overlap.
//!
//! ```rust
//! use textcore::MatchFinder;
//!
//! let finder = MatchFinder::new(r"\d+").unwrap();
//! let text = "row 12, col 7";
//! let found: Vec<&str> = finder.ranges(text).into_iter().map(|r| &text[r]).collect();
//! assert_eq!(found, vec!["12", "7"]);
//! ```

use std::ops::Range;

use regex::Regex;

use crate::error::{Result, TextCoreError};

/// Capture groups needed by [`MatchFinder::three_part`], besides the whole match.
const THREE_PART_GROUPS: usize = 3;

/// Byte ranges of every match of `pattern` in `text`.
///
/// ```rust
/// use textcore::find_all_match_ranges;
///
/// assert_eq!(find_all_match_ranges("a-b-c", "-").unwrap(), vec![1..2, 3..4]);
/// assert!(find_all_match_ranges("text", "(").is_err());
/// ```
pub fn find_all_match_ranges(text: &str, pattern: &str) -> Result<Vec<Range<usize>>> {
    Ok(MatchFinder::new(pattern)?.ranges(text))
}

/// A match split into syntax around some content, such as `*italics*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreePartMatch {
    /// The whole match.
    pub full: Range<usize>,
    /// First capture group.
    pub leading: Range<usize>,
    /// Second capture group.
    pub content: Range<usize>,
    /// Third capture group.
    pub trailing: Range<usize>,
}

/// A compiled pattern that reports where it matches.
#[derive(Clone, Debug)]
pub struct MatchFinder {
    regex: Regex,
}

impl MatchFinder {
    /// Compile `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(MatchFinder {
            regex: Regex::new(pattern)?,
        })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Byte ranges of every match.
    pub fn ranges(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|m| m.range()).collect()
    }

    /// Char ranges of every match, for callers that index by `char`.
    ///
    /// ```rust
    /// use textcore::MatchFinder;
    ///
    /// let finder = MatchFinder::new("b").unwrap();
    /// assert_eq!(finder.ranges("ééb"), vec![4..5]);
    /// assert_eq!(finder.char_ranges("ééb"), vec![2..3]);
    /// ```
    pub fn char_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut chars = 0;
        let mut consumed = 0;
        let mut to_char = |byte: usize| {
            chars += text[consumed..byte].chars().count();
            consumed = byte;
            chars
        };
        self.regex
            .find_iter(text)
            .map(|m| {
                let start = to_char(m.start());
                let end = to_char(m.end());
                start..end
            })
            .collect()
    }

    /// Byte range of the first match.
    pub fn first(&self, text: &str) -> Option<Range<usize>> {
        self.regex.find(text).map(|m| m.range())
    }

    /// The first match, split into its three capture groups.
    ///
    /// A group that did not take part in the match is reported as an empty
    /// range at the start of the whole match.
    ///
    /// Fails when the pattern has fewer than three capture groups.
    ///
    /// ```rust
    /// use textcore::MatchFinder;
    ///
    /// let finder = MatchFinder::new(r"(\*)([^*]+)(\*)").unwrap();
    /// let text = "an *emphatic* word";
    /// let parts = finder.three_part(text).unwrap().unwrap();
    /// assert_eq!(&text[parts.content], "emphatic");
    /// assert_eq!(&text[parts.full], "*emphatic*");
    /// ```
    pub fn three_part(&self, text: &str) -> Result<Option<ThreePartMatch>> {
        let found = self.regex.captures_len() - 1;
        if found < THREE_PART_GROUPS {
            return Err(TextCoreError::MissingCaptureGroups {
                expected: THREE_PART_GROUPS,
                found,
            });
        }

        let Some(captures) = self.regex.captures(text) else {
            return Ok(None);
        };
        let full = captures.get(0).map_or(0..0, |m| m.range());
        let group = |index: usize| {
            captures
                .get(index)
                .map_or(full.start..full.start, |m| m.range())
        };

        Ok(Some(ThreePartMatch {
            leading: group(1),
            content: group(2),
            trailing: group(3),
            full,
        }))
    }

    /// Call `callback` with the byte range and text of every match, in
    /// order, and return the number of matches.
    ///
    /// ```rust
    /// use textcore::MatchFinder;
    ///
    /// let finder = MatchFinder::new("o").unwrap();
    /// let mut seen = Vec::new();
    /// let count = finder.apply("foo bar boo", |range, _| seen.push(range.start));
    /// assert_eq!(count, 4);
    /// assert_eq!(seen, vec![1, 2, 9, 10]);
    /// ```
    pub fn apply<F>(&self, text: &str, mut callback: F) -> usize
    where
        F: FnMut(Range<usize>, &str),
    {
        let mut count = 0;
        for m in self.regex.find_iter(text) {
            callback(m.range(), m.as_str());
            count += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(pattern = self.as_str(), count, "applied pattern");

        count
    }
}
