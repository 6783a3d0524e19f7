//! Repeating character patterns rendered to an exact length.
//!
//! A [`FillPattern`] is a list of `(char, count)` runs. Rendering cycles
//! through the runs until the requested number of characters is produced,
//! cutting the last run short if needed.
//!
//! ```rust
//! use textcore::FillPattern;
//!
//! let rule = FillPattern::new([('=', 3), (' ', 1)]);
//! assert_eq!(rule.render(10), "=== === ==");
//! assert_eq!(FillPattern::dash_dot().render(5), "-.-.-");
//! ```

use serde::{Deserialize, Serialize};

/// An ordered list of `(char, count)` runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillPattern {
    parts: Vec<(char, usize)>,
}

impl FillPattern {
    /// Create a pattern from runs.
    pub fn new(parts: impl IntoIterator<Item = (char, usize)>) -> Self {
        FillPattern {
            parts: parts.into_iter().collect(),
        }
    }

    /// Alternating `-` and `.`.
    pub fn dash_dot() -> Self {
        FillPattern::new([('-', 1), ('.', 1)])
    }

    /// Add a run at the end.
    pub fn push(mut self, glyph: char, count: usize) -> Self {
        self.parts.push((glyph, count));
        self
    }

    /// The runs in order.
    pub fn parts(&self) -> &[(char, usize)] {
        &self.parts
    }

    /// Characters in one full cycle of the pattern.
    pub fn period(&self) -> usize {
        self.parts.iter().map(|&(_, count)| count).sum()
    }

    /// Render exactly `total` characters.
    ///
    /// A pattern with no characters in its cycle renders as the empty
    /// string regardless of `total`.
    pub fn render(&self, total: usize) -> String {
        if self.period() == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(total);
        let mut remaining = total;
        while remaining > 0 {
            for &(glyph, count) in &self.parts {
                let run = count.min(remaining);
                out.extend(std::iter::repeat(glyph).take(run));
                remaining -= run;
                if remaining == 0 {
                    break;
                }
            }
        }
        out
    }
}

/// Render `parts` cycled to exactly `total` characters.
pub fn repeat_pattern(parts: &[(char, usize)], total: usize) -> String {
    FillPattern::new(parts.iter().copied()).render(total)
}
