//! End-to-end grammar tests over lexer and parser.

use proptest::prelude::*;
use tally_ast::{ParticipantContext, SplitType, TokenCategory};
use tally_parser::{parse, parse_expense};

fn context() -> ParticipantContext {
    ParticipantContext::new(["Alice", "Bob", "David"])
}

#[test]
fn test_documented_examples() {
    let ast = parse_expense("Alice paid 100+25%", &context());
    assert!(ast.is_valid);
    assert_eq!(ast.payer.as_deref(), Some("Alice"));
    let amount = ast.amount.as_ref().unwrap();
    assert_eq!(amount.base, 125.0);
    assert_eq!(amount.modifier, Some(0.25));

    let ast = parse_expense(
        "David paid 50 for Burger. Split evenly among Alice and David",
        &context(),
    );
    assert!(ast.is_valid);
    assert_eq!(ast.split_type, Some(SplitType::Evenly));
    let names: Vec<_> = ast
        .split_among
        .as_ref()
        .unwrap()
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "David"]);

    let ast = parse_expense("Add 200 for Pizza", &context());
    assert!(ast.is_valid);
    assert!(ast.payer.is_none());
    assert_eq!(ast.item.as_deref(), Some("Pizza"));
    assert_eq!(ast.amount.as_ref().unwrap().base, 200.0);
}

#[test]
fn test_ast_tokens_exclude_whitespace() {
    let ast = parse_expense("Alice paid 10, split among Bob", &context());
    assert!(ast.is_valid);
    assert!(ast
        .tokens
        .iter()
        .all(|t| t.category() != TokenCategory::Whitespace));
}

#[test]
fn test_reparse_is_idempotent() {
    let sources = [
        "Alice paid 100+25%",
        "David paid 50 for Burger. Split evenly among Alice and David",
        "Add 200 for Pizza",
        "bob PAID 12.5 split among alice david",
    ];
    for source in sources {
        let first = parse_expense(source, &context());
        assert!(first.is_valid, "{} should parse: {:?}", source, first.errors);
        let second = parse_expense(&first.raw_text, &context());
        assert_eq!(first, second);
    }
}

#[test]
fn test_invalid_reports_errors() {
    let result = parse("Alice paid for Pizza", &context());
    assert!(!result.ast.is_valid);
    assert_eq!(result.ast.errors.len(), 1);
    assert_eq!(result.errors[0].span(), 11..14);
    assert!(result.ast.payer.is_none());
}

fn statement_strategy() -> impl Strategy<Value = String> {
    let payer = prop_oneof![Just("Alice paid"), Just("bob paid"), Just("Add")];
    let amount = "[0-9]{1,4}([+*/-][1-9][0-9]{0,2}%?)?";
    let item = prop_oneof![Just(""), Just(" for Pizza"), Just(" for Taxi")];
    let split = prop_oneof![
        Just(""),
        Just(". Split evenly among Alice and Bob"),
        Just(" split among David Bob"),
    ];
    (payer, amount, item, split)
        .prop_map(|(payer, amount, item, split)| format!("{} {}{}{}", payer, amount, item, split))
}

proptest! {
    #[test]
    fn parsing_is_deterministic(source in statement_strategy()) {
        prop_assert_eq!(parse_expense(&source, &context()), parse_expense(&source, &context()));
    }

    #[test]
    fn well_formed_statements_parse(source in statement_strategy()) {
        let ast = parse_expense(&source, &context());
        prop_assert!(ast.is_valid, "{}: {:?}", source, ast.errors);
        let reparsed = parse_expense(&ast.raw_text, &context());
        prop_assert_eq!(ast, reparsed);
    }
}
