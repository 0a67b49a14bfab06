//! Settlement inputs and outputs.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::Issue;

/// Someone who paid towards the expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payer {
    pub participant_id: SmolStr,
    pub amount_expression: String,
}

impl Payer {
    pub fn new(participant_id: impl Into<SmolStr>, amount_expression: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            amount_expression: amount_expression.into(),
        }
    }
}

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: SmolStr,
    pub name: String,
    pub amount_expression: String,
}

impl Item {
    pub fn new(
        id: impl Into<SmolStr>,
        name: impl Into<String>,
        amount_expression: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount_expression: amount_expression.into(),
        }
    }
}

/// A group of items divided among participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub id: SmolStr,
    pub item_ids: Vec<SmolStr>,
    pub shares: Vec<Share>,
}

impl Split {
    pub fn new<I, S>(id: impl Into<SmolStr>, item_ids: I, shares: Vec<Share>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            id: id.into(),
            item_ids: item_ids.into_iter().map(Into::into).collect(),
            shares,
        }
    }
}

/// A participant's portion of a split. The expression may use `x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub participant_id: SmolStr,
    pub share_expression: String,
}

impl Share {
    pub fn new(participant_id: impl Into<SmolStr>, share_expression: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            share_expression: share_expression.into(),
        }
    }
}

/// What one participant paid and owes, formatted to the currency digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBalance {
    pub participant_id: SmolStr,
    pub paid_amount: String,
    pub owes_amount: String,
}

/// The result of [`settle`](crate::settle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Payers first, then split participants, each once.
    pub participants: Vec<ParticipantBalance>,
    pub issues: Vec<Issue>,
}

impl Settlement {
    /// Check if the input settled without any issue.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn participant(&self, id: &str) -> Option<&ParticipantBalance> {
        self.participants.iter().find(|p| p.participant_id == id)
    }
}
