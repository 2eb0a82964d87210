use std::ops::Range;

use crate::error::excerpt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum TokenizeError {
    /// A code point in a source fragment matched no token rule.
    UnknownCodePoint {
        /// The offending code point.
        code_point: char,
        /// 1-based row within the fragment.
        line:       usize,
        /// 1-based column within the row.
        column:     usize,
        /// Rendered excerpt of the offending line with a caret highlight.
        excerpt:    String,
    },
}

impl TokenizeError {
    /// Builds an `UnknownCodePoint` error for the given span of a fragment.
    pub(crate) fn unknown_code_point(source: &str, span: Range<usize>) -> Self {
        let code_point = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
        let rendered = excerpt::render(source, span.start, span.end);
        Self::UnknownCodePoint { code_point,
                                 line: rendered.line,
                                 column: rendered.column,
                                 excerpt: rendered.rendered, }
    }
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCodePoint { code_point,
                                     line,
                                     column,
                                     excerpt, } => {
                write!(f,
                       "Unknown code point U+{:04X} at line {line}, column {column}.\n{excerpt}",
                       u32::from(*code_point))
            },
        }
    }
}

impl std::error::Error for TokenizeError {}
