//! The structured form of one expense statement.

use crate::Token;
use smol_str::SmolStr;

/// The result of parsing one expense statement.
///
/// A fresh value is produced for every parse call. When `is_valid` is false,
/// `errors` describes the first lexical or grammar violation, `tokens` holds
/// what was lexed, and the structured fields are empty.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpenseAst {
    /// The participant who paid: `Alice paid ...`
    pub payer: Option<SmolStr>,
    pub amount: Option<AmountExpr>,
    /// The item after `for`
    pub item: Option<SmolStr>,
    /// Participants named in the split clause, in order
    pub split_among: Option<Vec<SmolStr>>,
    pub split_type: Option<SplitType>,
    pub raw_text: String,
    /// Significant tokens in document order (whitespace excluded)
    pub tokens: Vec<Token>,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ExpenseAst {
    /// An AST for text that failed to lex or parse.
    pub fn invalid(raw_text: impl Into<String>, tokens: Vec<Token>, errors: Vec<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            tokens,
            is_valid: false,
            errors,
            ..Default::default()
        }
    }
}

/// An amount as written, with its evaluated value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountExpr {
    /// The evaluated amount: `125` for `100+25%`
    pub base: f64,
    /// The percentage as a fraction: `0.25` for `100+25%`
    pub modifier: Option<f64>,
    pub raw_text: SmolStr,
}

/// How a split clause divides the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplitType {
    /// `split evenly among`
    Evenly,
    /// `split among`
    Custom,
}

impl SplitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitType::Evenly => "evenly",
            SplitType::Custom => "custom",
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_split_type_serializes_lowercase() {
        let json = serde_json::to_string(&SplitType::Evenly).unwrap();
        assert_eq!(json, "\"evenly\"");
    }
}
