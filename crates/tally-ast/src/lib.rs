//! # Tally AST
//!
//! Shared vocabulary of the Tally expense language: the lexical token model
//! produced by the lexer and the [`ExpenseAst`] produced by the parser.
//!
//! A statement such as
//!
//! ```text
//! David paid 50 for Burger. Split evenly among Alice and David
//! ```
//!
//! lexes into member, keyword, expression, operator and item tokens, and
//! parses into an [`ExpenseAst`] with a payer, an amount, an item and a
//! split clause. Every value here is constructed fresh per parse and is
//! never mutated afterwards.

mod ast;
mod context;
mod span;
mod token;

pub use ast::{AmountExpr, ExpenseAst, SplitType};
pub use context::ParticipantContext;
pub use span::Span;
pub use token::{Token, TokenCategory, TokenKind, TokenMetadata};
