//! Candidate pools and their ranking.

use crate::ExpectedCategory;
use tally_ast::ParticipantContext;

/// Which pool a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionCategory {
    Member,
    Keyword,
    Operator,
    /// Arithmetic operators offered inside an amount
    Math,
}

/// One ranked completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    /// Text that replaces the word under the caret
    pub insertion_text: String,
    pub display_label: String,
    pub priority: i32,
}

/// Keywords: (insertion, label, contexts where it fits, priority when it fits).
const KEYWORDS: &[(&str, &str, &[ExpectedCategory], i32)] = &[
    ("Add ", "Add", &[ExpectedCategory::Start], 95),
    ("paid ", "paid", &[ExpectedCategory::PaidKeyword], 100),
    (
        "Split evenly among ",
        "Split evenly among",
        &[ExpectedCategory::SplitKeyword, ExpectedCategory::ForOrSplit],
        95,
    ),
    (
        "Split among ",
        "Split among",
        &[ExpectedCategory::SplitKeyword, ExpectedCategory::ForOrSplit],
        90,
    ),
    ("evenly ", "evenly", &[ExpectedCategory::SplitMode], 85),
    (
        "among ",
        "among",
        &[ExpectedCategory::SplitMode, ExpectedCategory::AmongKeyword],
        80,
    ),
];

/// Operators: (insertion, label, contexts where it fits, priority when it fits).
const OPERATORS: &[(&str, &str, &[ExpectedCategory], i32)] = &[
    ("for ", "for", &[ExpectedCategory::ForOrSplit], 100),
    ("and ", "and", &[ExpectedCategory::AndOrMember], 85),
];

/// Arithmetic operators: (insertion, label, priority).
const MATH_OPERATORS: &[(&str, &str, i32)] = &[
    ("+", "+", 100),
    ("-", "-", 100),
    ("*", "×", 100),
    ("/", "÷", 100),
    ("%", "%", 100),
    ("(", "(", 90),
    (")", ")", 90),
];

const MEMBER_PRIORITY_START: i32 = 100;
const MEMBER_PRIORITY_LIST: i32 = 90;
const MEMBER_PRIORITY_DEFAULT: i32 = 50;
const MEMBER_PRIORITY_SUPPRESSED: i32 = 10;
const KEYWORD_PRIORITY_SUPPRESSED: i32 = 20;
const OPERATOR_PRIORITY_SUPPRESSED: i32 = 15;

/// Check if the caret sits directly after a digit.
pub fn should_show_math_operators(text: &str, caret: usize) -> bool {
    text.get(..caret)
        .and_then(|before| before.chars().next_back())
        .is_some_and(|c| c.is_ascii_digit())
}

pub(crate) fn math_operators() -> Vec<Suggestion> {
    MATH_OPERATORS
        .iter()
        .map(|(value, label, priority)| Suggestion {
            category: SuggestionCategory::Math,
            insertion_text: value.to_string(),
            display_label: label.to_string(),
            priority: *priority,
        })
        .collect()
}

pub(crate) fn member_suggestions(
    context: &ParticipantContext,
    prefix: &str,
    expected: ExpectedCategory,
) -> Vec<Suggestion> {
    let priority = match expected {
        ExpectedCategory::Start => MEMBER_PRIORITY_START,
        ExpectedCategory::Member | ExpectedCategory::AndOrMember => MEMBER_PRIORITY_LIST,
        ExpectedCategory::Unknown => MEMBER_PRIORITY_DEFAULT,
        _ => MEMBER_PRIORITY_SUPPRESSED,
    };

    context
        .members()
        .iter()
        .filter(|member| starts_with_ignore_case(member, prefix))
        .map(|member| Suggestion {
            category: SuggestionCategory::Member,
            insertion_text: format!("{} ", member),
            display_label: member.to_string(),
            priority,
        })
        .collect()
}

pub(crate) fn keyword_suggestions(prefix: &str, expected: ExpectedCategory) -> Vec<Suggestion> {
    ranked(KEYWORDS, SuggestionCategory::Keyword, prefix, expected, KEYWORD_PRIORITY_SUPPRESSED)
}

pub(crate) fn operator_suggestions(prefix: &str, expected: ExpectedCategory) -> Vec<Suggestion> {
    ranked(OPERATORS, SuggestionCategory::Operator, prefix, expected, OPERATOR_PRIORITY_SUPPRESSED)
}

fn ranked(
    table: &[(&str, &str, &[ExpectedCategory], i32)],
    category: SuggestionCategory,
    prefix: &str,
    expected: ExpectedCategory,
    suppressed: i32,
) -> Vec<Suggestion> {
    table
        .iter()
        .filter(|(_, label, _, _)| starts_with_ignore_case(label, prefix))
        .map(|(value, label, fits, priority)| Suggestion {
            category,
            insertion_text: value.to_string(),
            display_label: label.to_string(),
            priority: if fits.contains(&expected) {
                *priority
            } else {
                suppressed
            },
        })
        .collect()
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// The partial word that ends at the caret.
pub(crate) fn word_prefix(text: &str, caret: usize) -> &str {
    let before = &text[..caret];
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(i, _)| i)
        .unwrap_or(caret);
    &before[start..]
}
