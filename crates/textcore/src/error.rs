//! Error types for textcore.
//!
//! Padding and grid composition never fail. Errors only come from the edges
//! of the crate: compiling match patterns, loading presets, and parsing
//! option names from strings.

use std::io;

/// Errors that can occur when building patterns or loading presets.
#[derive(Debug, thiserror::Error)]
pub enum TextCoreError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Pattern does not have enough capture groups for the requested form.
    #[error("pattern has {found} capture groups, expected at least {expected}")]
    MissingCaptureGroups { expected: usize, found: usize },

    /// Preset could not be deserialized.
    #[error("invalid preset: {0}")]
    Preset(#[from] serde_yaml::Error),

    /// Preset file could not be read.
    #[error("failed to read preset: {0}")]
    Io(#[from] io::Error),

    /// Unknown alignment name.
    #[error("unknown alignment '{0}', expected leading, center or trailing")]
    InvalidAlignment(String),

    /// Unknown width measure name.
    #[error("unknown measure '{0}', expected chars or columns")]
    InvalidMeasure(String),

    /// Unknown border style name.
    #[error("unknown border style '{0}'")]
    InvalidBorder(String),
}

/// Result type for textcore operations.
pub type Result<T> = std::result::Result<T, TextCoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextCoreError::MissingCaptureGroups {
            expected: 3,
            found: 1,
        };
        assert!(err.to_string().contains("1 capture groups"));
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TextCoreError = io_err.into();
        assert!(matches!(err, TextCoreError::Io(_)));
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: TextCoreError = regex_err.into();
        assert!(matches!(err, TextCoreError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("invalid regex pattern"));
    }
}
