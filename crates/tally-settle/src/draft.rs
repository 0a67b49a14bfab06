//! Turning a parsed statement into settlement input.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tally_ast::{ExpenseAst, TokenKind, TokenMetadata};
use thiserror::Error;

use crate::model::{Item, Payer, Settlement, Share, Split};

const ITEM_ID: &str = "item-1";
const SPLIT_ID: &str = "split-1";
const DEFAULT_ITEM_NAME: &str = "Expense";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("statement is not valid: {}", .0.join("; "))]
    InvalidStatement(Vec<String>),

    #[error("statement has no amount")]
    MissingAmount,
}

/// Payers, items and splits ready for [`settle`](crate::settle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementDraft {
    pub payers: Vec<Payer>,
    pub items: Vec<Item>,
    pub splits: Vec<Split>,
}

impl SettlementDraft {
    /// Build a draft from a valid statement.
    ///
    /// The statement's amount becomes one item, paid by the payer if there
    /// is one. Everyone in the split gets the share `x`, so the item is
    /// divided equally. Participants are named by their spelling in the
    /// participant context, whatever case was typed.
    pub fn from_ast(ast: &ExpenseAst) -> Result<Self, DraftError> {
        if !ast.is_valid {
            return Err(DraftError::InvalidStatement(ast.errors.clone()));
        }
        let amount = ast.amount.as_ref().ok_or(DraftError::MissingAmount)?;
        let expression = amount.raw_text.to_string();

        let payers = ast
            .payer
            .iter()
            .map(|payer| Payer::new(canonical_member(ast, payer), expression.clone()))
            .collect();

        let name = ast.item.as_deref().unwrap_or(DEFAULT_ITEM_NAME);
        let items = vec![Item::new(ITEM_ID, name, expression)];

        let splits = match &ast.split_among {
            Some(members) => {
                let participants: IndexSet<SmolStr> = members
                    .iter()
                    .map(|member| canonical_member(ast, member))
                    .collect();
                let shares = participants
                    .into_iter()
                    .map(|participant| Share::new(participant, "x"))
                    .collect();
                vec![Split::new(SPLIT_ID, [ITEM_ID], shares)]
            }
            None => Vec::new(),
        };

        Ok(Self {
            payers,
            items,
            splits,
        })
    }

    pub fn settle(&self, digits: u32) -> Settlement {
        crate::settle(&self.payers, &self.items, &self.splits, digits)
    }
}

/// The context spelling of a member as typed in the statement.
fn canonical_member(ast: &ExpenseAst, typed: &SmolStr) -> SmolStr {
    ast.tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Member && token.text == *typed)
        .find_map(|token| match &token.metadata {
            Some(TokenMetadata::Member { member_id }) => Some(member_id.clone()),
            _ => None,
        })
        .unwrap_or_else(|| typed.clone())
}
