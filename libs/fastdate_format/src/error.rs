// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Error types for pattern compilation and parsing.

use std::fmt;

/// Error raised while compiling a format pattern.
///
/// Compilation fails immediately on the first offending character; nothing
/// is deferred to format or parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A letter that is not a recognized directive
    UnsupportedLetter { letter: char, index: usize },
    /// A directive repeated to a width its field does not support
    UnsupportedWidth {
        letter: char,
        width: usize,
        index: usize,
    },
    /// An opening quote with no matching closing quote
    UnterminatedQuote { index: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnsupportedLetter { letter, index } => {
                write!(f, "illegal pattern letter '{}' at index {}", letter, index)
            },
            PatternError::UnsupportedWidth {
                letter,
                width,
                index,
            } => {
                write!(
                    f,
                    "invalid width {} for pattern letter '{}' at index {}",
                    width, letter, index
                )
            },
            PatternError::UnterminatedQuote { index } => {
                write!(f, "unterminated quote at index {}", index)
            },
        }
    }
}

impl std::error::Error for PatternError {}

/// Error raised when input text does not match a compiled format.
///
/// Carries the full source text and the index of the first strategy
/// mismatch. There is no partial result; the parse aborts at the first
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    text: String,
    index: usize,
    hint: Option<&'static str>,
}

impl ParseError {
    pub(crate) fn new(text: &str, index: usize, hint: Option<&'static str>) -> Self {
        Self {
            text: text.to_string(),
            index,
            hint,
        }
    }

    /// The source text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the first character the parser could not consume.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unparseable date: {:?} at index {}",
            self.text, self.index
        )?;
        if let Some(hint) = self.hint {
            write!(f, " ({})", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::UnsupportedLetter {
            letter: 'Q',
            index: 3,
        };
        assert_eq!(err.to_string(), "illegal pattern letter 'Q' at index 3");

        let err = PatternError::UnterminatedQuote { index: 7 };
        assert_eq!(err.to_string(), "unterminated quote at index 7");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("not a date", 0, None);
        assert_eq!(err.to_string(), "unparseable date: \"not a date\" at index 0");

        let err = ParseError::new("99/99/99", 3, Some("restricted range"));
        assert!(err.to_string().ends_with("(restricted range)"));
    }
}
