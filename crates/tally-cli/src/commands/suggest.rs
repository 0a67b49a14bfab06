//! Suggest command - rank completions at a caret.

use tally_driver::{analyze, DriverConfig};

pub fn run(text: &str, caret: Option<usize>, config: &DriverConfig) -> miette::Result<()> {
    let caret = caret.unwrap_or(text.len());
    let analysis = analyze(text, caret, config);

    for suggestion in &analysis.suggestions {
        println!(
            "{:4}  {:10}  {:?}",
            suggestion.priority,
            format!("{:?}", suggestion.category),
            suggestion.display_label
        );
    }

    println!("\n{} suggestions", analysis.suggestions.len());
    Ok(())
}
