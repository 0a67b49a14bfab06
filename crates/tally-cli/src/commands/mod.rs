//! CLI commands.

pub mod eval;
pub mod lex;
pub mod parse;
pub mod settle;
pub mod statement;
pub mod suggest;

use std::ops::Range;
use tally_settle::{Issue, Settlement};

/// Print an error with the offending part of the statement underlined.
pub fn print_error(source: &str, span: Range<usize>, message: &str) {
    let start = span.start.min(source.len());
    let end = span.end.clamp(start, source.len());
    let column = source[..start].chars().count();
    let width = source[start..end].chars().count().max(1);

    println!("  error: {}", message);
    println!("    |");
    println!("    | {}", source);
    println!("    | {}{}", " ".repeat(column), "^".repeat(width));
}

/// Print a settlement as a table followed by its issues.
pub fn print_settlement(settlement: &Settlement) {
    println!("{:<16}  {:>12}  {:>12}", "participant", "paid", "owes");
    for balance in &settlement.participants {
        println!(
            "{:<16}  {:>12}  {:>12}",
            balance.participant_id, balance.paid_amount, balance.owes_amount
        );
    }

    if !settlement.issues.is_empty() {
        println!("\nIssues:");
        for issue in &settlement.issues {
            print_issue(issue);
        }
    }
}

fn print_issue(issue: &Issue) {
    println!("  {} at {}: {}", issue.kind, issue.path, issue.message);
}

/// Fail when a settlement has issues.
pub fn settlement_result(settlement: &Settlement) -> miette::Result<()> {
    if settlement.is_valid() {
        Ok(())
    } else {
        Err(miette::miette!(
            "{} settlement issue(s)",
            settlement.issues.len()
        ))
    }
}

/// Serialize a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> miette::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}
