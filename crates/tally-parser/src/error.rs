//! Parser error definitions.

use tally_ast::TokenKind;
use tally_expr::ExprError;
use tally_lexer::LexError;
use thiserror::Error;

/// A grammar violation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {} '{text}' at offset {}", found.describe(), span.start)]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        text: String,
        span: std::ops::Range<usize>,
    },

    #[error("expected {expected} at end of input")]
    UnexpectedEnd {
        expected: String,
        span: std::ops::Range<usize>,
    },

    #[error("invalid amount '{text}' at offset {}: {source}", span.start)]
    InvalidAmount {
        text: String,
        source: ExprError,
        span: std::ops::Range<usize>,
    },
}

impl ParseError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            ParseError::UnexpectedToken { span, .. } => span.clone(),
            ParseError::UnexpectedEnd { span, .. } => span.clone(),
            ParseError::InvalidAmount { span, .. } => span.clone(),
        }
    }
}

/// Any error that makes a statement invalid.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Get the span of this error.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            SyntaxError::Lex(err) => err.span(),
            SyntaxError::Parse(err) => err.span(),
        }
    }
}
