//! Parse command - parse a statement and show the AST.

use tally_ast::ExpenseAst;
use tally_driver::DriverConfig;
use tally_parser::parse;

use super::{print_error, print_json};

pub fn run(text: &str, config: &DriverConfig, json: bool) -> miette::Result<()> {
    let result = parse(text, &config.context);

    if json {
        print_json(&result.ast)?;
    } else {
        for err in &result.errors {
            print_error(text, err.span(), &err.to_string());
        }
        if !result.errors.is_empty() {
            println!();
        }
        print_ast(&result.ast);
    }

    if result.errors.is_empty() {
        Ok(())
    } else {
        Err(miette::miette!("{} parse errors", result.errors.len()))
    }
}

fn print_ast(ast: &ExpenseAst) {
    println!("valid:  {}", ast.is_valid);
    if let Some(payer) = &ast.payer {
        println!("payer:  {}", payer);
    }
    if let Some(amount) = &ast.amount {
        match amount.modifier {
            Some(modifier) => println!(
                "amount: {} = {} (modifier {})",
                amount.raw_text, amount.base, modifier
            ),
            None => println!("amount: {} = {}", amount.raw_text, amount.base),
        }
    }
    if let Some(item) = &ast.item {
        println!("item:   {}", item);
    }
    if let (Some(split_type), Some(members)) = (&ast.split_type, &ast.split_among) {
        let names: Vec<_> = members.iter().map(|m| m.as_str()).collect();
        println!("split:  {} among {}", split_type.as_str(), names.join(", "));
    }
}
