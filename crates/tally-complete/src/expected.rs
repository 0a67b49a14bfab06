//! What the grammar allows next.

use tally_ast::{Token, TokenKind};

/// The token category the grammar allows at the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedCategory {
    /// Nothing typed yet: a member or `Add`
    Start,
    /// After the leading member: `paid`
    PaidKeyword,
    /// After `paid` or `Add`: an amount
    Expression,
    /// After the amount: `for` or a split clause
    ForOrSplit,
    /// After `for`: an item name
    Item,
    /// After the item: a split clause
    SplitKeyword,
    /// After a bare `split`: `evenly` or `among`
    SplitMode,
    /// After `split evenly`: `among`
    AmongKeyword,
    /// After a split keyword or `and`: a member
    Member,
    /// After a member in the split list: `and` or another member
    AndOrMember,
    Unknown,
}

/// Decide what comes next from the significant tokens ending at or before
/// `offset`.
pub fn expected_category(tokens: &[Token], offset: usize) -> ExpectedCategory {
    let before: Vec<&Token> = tokens
        .iter()
        .filter(|t| !t.is_trivia() && t.end_offset() <= offset)
        .collect();

    let Some(last) = before.last() else {
        return ExpectedCategory::Start;
    };

    match last.kind {
        TokenKind::Member if before.len() == 1 => ExpectedCategory::PaidKeyword,
        TokenKind::Member if in_split_clause(&before) => ExpectedCategory::AndOrMember,
        TokenKind::Paid | TokenKind::Add => ExpectedCategory::Expression,
        TokenKind::Expression => ExpectedCategory::ForOrSplit,
        TokenKind::For => ExpectedCategory::Item,
        TokenKind::Item => ExpectedCategory::SplitKeyword,
        TokenKind::Split => ExpectedCategory::SplitMode,
        TokenKind::Evenly => ExpectedCategory::AmongKeyword,
        TokenKind::SplitEvenlyAmong | TokenKind::SplitAmong | TokenKind::Among => {
            ExpectedCategory::Member
        }
        TokenKind::And => ExpectedCategory::Member,
        _ => ExpectedCategory::Unknown,
    }
}

fn in_split_clause(tokens: &[&Token]) -> bool {
    tokens
        .iter()
        .any(|t| t.kind.is_split_keyword() || t.kind == TokenKind::Among)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_ast::ParticipantContext;

    fn expected(text: &str) -> ExpectedCategory {
        let context = ParticipantContext::new(["Alice", "Bob"]);
        let (tokens, _) = tally_lexer::tokenize(text, &context);
        expected_category(&tokens, text.len())
    }

    #[test]
    fn test_statement_progression() {
        assert_eq!(expected(""), ExpectedCategory::Start);
        assert_eq!(expected("Alice "), ExpectedCategory::PaidKeyword);
        assert_eq!(expected("Alice paid "), ExpectedCategory::Expression);
        assert_eq!(expected("Add "), ExpectedCategory::Expression);
        assert_eq!(expected("Alice paid 10 "), ExpectedCategory::ForOrSplit);
        assert_eq!(expected("Alice paid 10 for "), ExpectedCategory::Item);
        assert_eq!(expected("Alice paid 10 for Cake "), ExpectedCategory::SplitKeyword);
        assert_eq!(expected("Alice paid 10 for Cake. "), ExpectedCategory::SplitKeyword);
        assert_eq!(expected("Add 10 split "), ExpectedCategory::SplitMode);
        assert_eq!(expected("Add 10 split evenly "), ExpectedCategory::AmongKeyword);
        assert_eq!(expected("Add 10 split among "), ExpectedCategory::Member);
        assert_eq!(expected("Add 10 split among Bob "), ExpectedCategory::AndOrMember);
        assert_eq!(expected("Add 10 split among Bob and "), ExpectedCategory::Member);
    }

    #[test]
    fn test_member_after_payment_is_unknown() {
        assert_eq!(expected("Alice paid 10 Bob "), ExpectedCategory::Unknown);
    }

    #[test]
    fn test_offset_ignores_later_tokens() {
        let context = ParticipantContext::new(["Alice"]);
        let text = "Alice paid 10";
        let (tokens, _) = tally_lexer::tokenize(text, &context);
        assert_eq!(expected_category(&tokens, 6), ExpectedCategory::PaidKeyword);
        assert_eq!(expected_category(&tokens, 0), ExpectedCategory::Start);
    }
}
