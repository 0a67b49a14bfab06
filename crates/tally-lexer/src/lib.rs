//! # Tally Lexer
//!
//! Tokenizes an expense statement into a stream of tokens.
//!
//! The static part of the vocabulary (keywords, amounts, punctuation) is a
//! `logos` lexer. Participant names are dynamic: they come from the
//! [`ParticipantContext`] supplied with each call and are matched
//! case-insensitively, ahead of single keywords and generic identifiers.
//!
//! Whitespace and punctuation are kept in the stream, so concatenating the
//! text of every token reproduces the input exactly.
//!
//! ## Example
//!
//! ```
//! use tally_ast::{ParticipantContext, TokenCategory};
//! use tally_lexer::tokenize;
//!
//! let context = ParticipantContext::new(["Alice"]);
//! let (tokens, errors) = tokenize("Alice paid 100", &context);
//!
//! assert!(errors.is_empty());
//! assert_eq!(tokens[0].category(), TokenCategory::Member);
//! ```

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::{Lexer, MemberTable};

use tally_ast::{ParticipantContext, Token};

/// Tokenize a statement, including whitespace tokens.
///
/// Lexing stops at the first position no pattern matches; that position is
/// reported as the single error and the tokens before it are returned.
pub fn tokenize(source: &str, context: &ParticipantContext) -> (Vec<Token>, Vec<LexError>) {
    let members = MemberTable::new(context);
    let lexer = Lexer::new(source, &members);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for result in lexer {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    (tokens, errors)
}
