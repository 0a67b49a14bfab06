//! Accumulated settlement problems.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of problem an [`Issue`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// An amount or share expression that does not evaluate
    InvalidExpression,
    /// No value of `x` satisfies the split
    UnsolvableShare,
    /// A payer or item amount below zero
    NegativeAmount,
    /// A share that is negative or not a number
    InvalidShare,
    /// Totals that disagree by more than the currency tolerance
    ReconciliationMismatch,
    /// A dangling or orphaned item reference
    ReferentialError,
    /// An empty payer, item, split or share list
    MissingEntries,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidExpression => "invalid expression",
            IssueKind::UnsolvableShare => "unsolvable share",
            IssueKind::NegativeAmount => "negative amount",
            IssueKind::InvalidShare => "invalid share",
            IssueKind::ReconciliationMismatch => "reconciliation mismatch",
            IssueKind::ReferentialError => "referential error",
            IssueKind::MissingEntries => "missing entries",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of an [`IssuePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Where in the input an issue belongs, e.g. `splits[0].shares[1].shareExpression`.
///
/// Serializes as a list of segments: `["splits", 0, "shares", 1, "shareExpression"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath(Vec<PathSegment>);

impl IssuePath {
    pub fn root(field: &str) -> Self {
        Self(vec![PathSegment::Field(field.to_string())])
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    pub fn field(mut self, field: &str) -> Self {
        self.0.push(PathSegment::Field(field.to_string()));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// A problem found while settling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub path: IssuePath,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, path: IssuePath, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = IssuePath::root("splits")
            .index(0)
            .field("shares")
            .index(1)
            .field("shareExpression");
        assert_eq!(path.to_string(), "splits[0].shares[1].shareExpression");
    }

    #[test]
    fn test_path_serializes_as_segments() {
        let path = IssuePath::root("payers").index(2).field("amountExpression");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["payers",2,"amountExpression"]"#);
    }
}
