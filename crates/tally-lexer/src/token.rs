//! The static token patterns.

use logos::Logos;
use tally_ast::TokenKind;

/// Patterns that do not depend on the participant list.
///
/// Matching is longest-first, so `Sandwich` is one identifier rather than
/// `and` inside a word, and `split evenly among` beats `split`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // ========================================================================
    // Keywords
    // ========================================================================
    #[regex(r"split[ \t\r\n]+evenly[ \t\r\n]+among", ignore(ascii_case))]
    SplitEvenlyAmong,
    #[regex(r"split[ \t\r\n]+among", ignore(ascii_case))]
    SplitAmong,
    #[token("paid", ignore(ascii_case))]
    Paid,
    #[token("add", ignore(ascii_case))]
    Add,
    #[token("split", ignore(ascii_case))]
    Split,
    #[token("evenly", ignore(ascii_case))]
    Evenly,
    #[token("among", ignore(ascii_case))]
    Among,

    // ========================================================================
    // Operators
    // ========================================================================
    #[token("for", ignore(ascii_case))]
    For,
    #[token("and", ignore(ascii_case))]
    And,

    /// A number, optionally followed by one operator, one number and `%`
    #[regex(r"[0-9]+(\.[0-9]+)?([+\-*/][0-9]+(\.[0-9]+)?)?%?")]
    Expression,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("(")]
    #[token(")")]
    Symbol,

    #[token(".")]
    #[token(",")]
    Separator,

    #[regex(r"\p{L}[\p{L}\p{N}_]*")]
    Identifier,
}

impl RawToken {
    /// Check if this is a compound split keyword, which outranks members.
    pub(crate) fn is_compound_keyword(&self) -> bool {
        matches!(self, RawToken::SplitEvenlyAmong | RawToken::SplitAmong)
    }

    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::SplitEvenlyAmong => TokenKind::SplitEvenlyAmong,
            RawToken::SplitAmong => TokenKind::SplitAmong,
            RawToken::Paid => TokenKind::Paid,
            RawToken::Add => TokenKind::Add,
            RawToken::Split => TokenKind::Split,
            RawToken::Evenly => TokenKind::Evenly,
            RawToken::Among => TokenKind::Among,
            RawToken::For => TokenKind::For,
            RawToken::And => TokenKind::And,
            RawToken::Expression => TokenKind::Expression,
            RawToken::Symbol => TokenKind::Symbol,
            RawToken::Separator => TokenKind::Separator,
            RawToken::Identifier => TokenKind::Item,
        }
    }
}
