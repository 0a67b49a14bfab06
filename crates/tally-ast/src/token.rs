//! Token definitions shared by the lexer, parser and autocomplete engine.

use crate::Span;
use smol_str::SmolStr;

/// A lexed token: its kind, the exact text it covers and where.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// The slice of the raw text this token was lexed from, as typed.
    pub text: SmolStr,
    pub span: Span,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub metadata: Option<TokenMetadata>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            metadata: None,
        }
    }

    /// Attach metadata to this token.
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The lexical category of this token.
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Check if this token is whitespace or separator punctuation.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Byte offset where this token starts.
    pub fn start_offset(&self) -> usize {
        self.span.start as usize
    }

    /// Byte offset one past the end of this token.
    pub fn end_offset(&self) -> usize {
        self.span.end as usize
    }
}

/// The coarse lexical categories a rendering layer styles by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenCategory {
    Member,
    Keyword,
    Expression,
    Operator,
    Item,
    Whitespace,
}

impl TokenCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Member => "member",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Expression => "expression",
            TokenCategory::Operator => "operator",
            TokenCategory::Item => "item",
            TokenCategory::Whitespace => "whitespace",
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // ========================================================================
    // Keywords
    // ========================================================================
    /// `split evenly among`, matched as one token
    SplitEvenlyAmong,
    /// `split among`, matched as one token
    SplitAmong,
    Paid,
    Add,
    Split,
    Evenly,
    Among,

    // ========================================================================
    // Operators
    // ========================================================================
    For,
    And,
    /// A stray math symbol outside an expression: `+ - * / % ( )`
    Symbol,

    // ========================================================================
    // Values
    // ========================================================================
    /// A participant name from the context
    Member,
    /// `100`, `12.5`, `100+25%`
    Expression,
    /// Any other identifier
    Item,

    // ========================================================================
    // Trivia
    // ========================================================================
    Whitespace,
    /// Sentence punctuation: `.` and `,`
    Separator,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::SplitEvenlyAmong
            | TokenKind::SplitAmong
            | TokenKind::Paid
            | TokenKind::Add
            | TokenKind::Split
            | TokenKind::Evenly
            | TokenKind::Among => TokenCategory::Keyword,
            TokenKind::For | TokenKind::And | TokenKind::Symbol => TokenCategory::Operator,
            TokenKind::Member => TokenCategory::Member,
            TokenKind::Expression => TokenCategory::Expression,
            TokenKind::Item => TokenCategory::Item,
            TokenKind::Whitespace | TokenKind::Separator => TokenCategory::Whitespace,
        }
    }

    /// Check if this token opens a split clause.
    pub fn is_split_keyword(&self) -> bool {
        matches!(self, TokenKind::SplitEvenlyAmong | TokenKind::SplitAmong)
    }

    /// Check if this token is skipped by the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Separator)
    }

    /// Human-readable description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::SplitEvenlyAmong => "'split evenly among'",
            TokenKind::SplitAmong => "'split among'",
            TokenKind::Paid => "'paid'",
            TokenKind::Add => "'Add'",
            TokenKind::Split => "'split'",
            TokenKind::Evenly => "'evenly'",
            TokenKind::Among => "'among'",
            TokenKind::For => "'for'",
            TokenKind::And => "'and'",
            TokenKind::Symbol => "math symbol",
            TokenKind::Member => "member",
            TokenKind::Expression => "amount",
            TokenKind::Item => "item name",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Separator => "punctuation",
        }
    }
}

/// Extra information attached to some tokens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum TokenMetadata {
    /// The participant a member token refers to, as spelled in the context.
    Member { member_id: SmolStr },
    /// The evaluated value of an expression token.
    Expression { value: f64 },
}
