//! # Tally Driver
//!
//! Runs the statement pipeline end to end:
//!
//! 1. Lexing and parsing the statement against the session's participants
//! 2. Ranking autocomplete suggestions for the caret
//! 3. Turning a valid statement into settlement input
//! 4. Solving shares and checking that the totals reconcile
//!
//! Steps 1 and 2 run on every keystroke through [`analyze`]. Steps 3 and 4
//! run once the statement is complete through [`settle_statement`].

mod config;

pub use config::{split_members, DriverConfig, DriverConfigBuilder, DEFAULT_CURRENCY};

use tally_ast::ExpenseAst;
use tally_complete::Suggestion;
use tally_parser::SyntaxError;
use tally_settle::{DraftError, Settlement, SettlementDraft};
use thiserror::Error;

/// What the editor needs after a keystroke.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub ast: ExpenseAst,
    pub errors: Vec<SyntaxError>,
    pub suggestions: Vec<Suggestion>,
}

/// A settled statement.
#[derive(Debug, Clone)]
pub struct StatementSettlement {
    pub ast: ExpenseAst,
    pub draft: SettlementDraft,
    pub settlement: Settlement,
}

/// Errors that stop a statement from reaching settlement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    #[error("{}", .0.first().map(ToString::to_string).unwrap_or_default())]
    Syntax(Vec<SyntaxError>),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

impl DriverError {
    /// The byte span of the first syntax error, if any.
    pub fn span(&self) -> Option<std::ops::Range<usize>> {
        match self {
            DriverError::Syntax(errors) => errors.first().map(|e| e.span()),
            DriverError::Draft(_) => None,
        }
    }
}

/// Parse `text` and rank suggestions for the caret.
pub fn analyze(text: &str, caret: usize, config: &DriverConfig) -> Analysis {
    tracing::info!(len = text.len(), caret, "Parsing...");
    let result = tally_parser::parse(text, &config.context);

    tracing::info!(valid = result.ast.is_valid, "Ranking suggestions...");
    let suggestions = tally_complete::suggest(Some(&result.ast), text, caret, &config.context);

    Analysis {
        ast: result.ast,
        errors: result.errors,
        suggestions,
    }
}

/// Parse a complete statement and settle it.
pub fn settle_statement(text: &str, config: &DriverConfig) -> Result<StatementSettlement, DriverError> {
    tracing::info!(len = text.len(), "Parsing...");
    let result = tally_parser::parse(text, &config.context);
    if !result.errors.is_empty() {
        return Err(DriverError::Syntax(result.errors));
    }

    tracing::info!("Building settlement...");
    let draft = SettlementDraft::from_ast(&result.ast)?;

    tracing::info!(digits = config.digits, "Settling...");
    let settlement = draft.settle(config.digits);

    Ok(StatementSettlement {
        ast: result.ast,
        draft,
        settlement,
    })
}
