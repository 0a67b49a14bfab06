//! Eval command - evaluate an amount or share expression.

use tally_expr::{evaluate, Bindings};

use super::print_error;

pub fn run(expr: &str, x: Option<f64>) -> miette::Result<()> {
    let bindings = x.map(|x| Bindings { x });

    match evaluate(expr, bindings.as_ref()) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(err) => {
            if let Some(span) = err.span() {
                print_error(expr, span, &err.to_string());
            }
            Err(miette::miette!("{}", err))
        }
    }
}
