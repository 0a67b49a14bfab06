//! Expression error definitions.

use thiserror::Error;

/// An invalid expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character at offset {}", span.start)]
    UnexpectedChar { span: std::ops::Range<usize> },

    #[error("expected {expected} at offset {}", span.start)]
    Expected {
        expected: &'static str,
        span: std::ops::Range<usize>,
    },

    #[error("unexpected input at offset {}", span.start)]
    TrailingInput { span: std::ops::Range<usize> },

    #[error("expression uses x but no value was given for it")]
    UnboundVariable,

    #[error("expression does not evaluate to a finite number")]
    NotFinite,
}

impl ExprError {
    /// Get the span of this error, when it points at the source.
    pub fn span(&self) -> Option<std::ops::Range<usize>> {
        match self {
            ExprError::UnexpectedChar { span } => Some(span.clone()),
            ExprError::Expected { span, .. } => Some(span.clone()),
            ExprError::TrailingInput { span } => Some(span.clone()),
            ExprError::Empty | ExprError::UnboundVariable | ExprError::NotFinite => None,
        }
    }
}
