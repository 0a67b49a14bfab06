//! Lexer error definitions.

use thiserror::Error;

/// A lexer error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{found}' at offset {}", span.start)]
    UnexpectedChar {
        found: char,
        span: std::ops::Range<usize>,
    },
}

impl LexError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            LexError::UnexpectedChar { span, .. } => span.clone(),
        }
    }
}
