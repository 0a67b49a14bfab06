//! Lex command - tokenize a statement.

use tally_driver::DriverConfig;
use tally_lexer::{Lexer, MemberTable};

use super::print_error;

pub fn run(text: &str, config: &DriverConfig) -> miette::Result<()> {
    let members = MemberTable::new(&config.context);
    let lexer = Lexer::new(text, &members);
    let mut token_count = 0;
    let mut error_count = 0;

    for result in lexer {
        match result {
            Ok(token) => {
                let metadata = token
                    .metadata
                    .as_ref()
                    .map(|m| format!("  {:?}", m))
                    .unwrap_or_default();
                println!(
                    "{:4}..{:4}  {:10}  {:16}  {:?}{}",
                    token.span.start,
                    token.span.end,
                    token.category().as_str(),
                    format!("{:?}", token.kind),
                    token.text.as_str(),
                    metadata
                );
                token_count += 1;
            }
            Err(err) => {
                print_error(text, err.span(), &err.to_string());
                error_count += 1;
            }
        }
    }

    println!("\n{} tokens, {} errors", token_count, error_count);

    if error_count > 0 {
        Err(miette::miette!("{} lexer errors", error_count))
    } else {
        Ok(())
    }
}
