//! # Tally Parser
//!
//! Parses an expense statement into an [`ExpenseAst`].
//!
//! The grammar is small and strictly sequential:
//!
//! ```text
//! expenseStatement := (paymentStatement | addStatement) splitClause?
//! paymentStatement := Member "paid" Expression ("for" Item)?
//! addStatement     := "Add" Expression ("for" Item)?
//! splitClause      := ("split evenly among" | "split among") memberList
//! memberList       := Member ("and"? Member)*
//! ```
//!
//! Parsing is purely syntactic and stops at the first violation. Whether the
//! named participants make sense together is the settlement engine's concern.
//!
//! ## Example
//!
//! ```
//! use tally_ast::ParticipantContext;
//! use tally_parser::parse;
//!
//! let context = ParticipantContext::new(["Alice", "Bob"]);
//! let result = parse("Alice paid 100+25%", &context);
//! assert!(result.errors.is_empty());
//! assert_eq!(result.ast.payer.as_deref(), Some("Alice"));
//! ```

mod error;
mod parser;

pub use error::{ParseError, SyntaxError};
pub use parser::Parser;

use tally_ast::{ExpenseAst, ParticipantContext, Token};

/// Result of parsing.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed AST (`is_valid` is false if errors occurred)
    pub ast: ExpenseAst,
    /// Any errors encountered during lexing or parsing
    pub errors: Vec<SyntaxError>,
}

/// Lex and parse a statement.
pub fn parse(source: &str, context: &ParticipantContext) -> ParseResult {
    let (tokens, lex_errors) = tally_lexer::tokenize(source, context);
    let significant: Vec<Token> = tokens.into_iter().filter(|t| !t.is_trivia()).collect();

    if !lex_errors.is_empty() {
        let errors: Vec<SyntaxError> = lex_errors.into_iter().map(SyntaxError::from).collect();
        let messages = errors.iter().map(|e| e.to_string()).collect();
        return ParseResult {
            ast: ExpenseAst::invalid(source, significant, messages),
            errors,
        };
    }

    let mut parser = Parser::new(source, significant);
    let ast = parser.parse_expense();
    ParseResult {
        ast,
        errors: parser.into_errors().into_iter().map(SyntaxError::from).collect(),
    }
}

/// Lex and parse a statement, keeping only the AST.
pub fn parse_expense(source: &str, context: &ParticipantContext) -> ExpenseAst {
    parse(source, context).ast
}
