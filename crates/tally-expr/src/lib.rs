//! # Tally Expression Evaluator
//!
//! Evaluates the small arithmetic language used for amounts and shares:
//!
//! ```text
//! expr    := '(' expr ')' | operand (op operand)? '%'?
//! operand := number | number? 'x'
//! op      := '+' | '-' | '*' | '/'
//! ```
//!
//! A trailing `%` turns the right operand into a percentage of the left one:
//! `100+25%` is `125`, `200*5%` is `10`. A bare `number%` is just `number`.
//! The single free variable `x` is used by proportional shares (`2x`) and is
//! solved for by the settlement engine.
//!
//! ## Example
//!
//! ```
//! use tally_expr::{evaluate, Bindings};
//!
//! assert_eq!(evaluate("100+25%", None).unwrap(), 125.0);
//! assert_eq!(evaluate("2x", Some(&Bindings { x: 30.0 })).unwrap(), 60.0);
//! ```

mod error;
mod expr;
mod token;

pub use error::ExprError;
pub use expr::{parse, BinOp, Expr, Operand};

/// Values for the free variable of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bindings {
    pub x: f64,
}

/// Parse and evaluate an expression.
///
/// Fails when the text does not conform to the grammar, when it references
/// `x` without `bindings`, or when the result is not a finite number.
pub fn evaluate(source: &str, bindings: Option<&Bindings>) -> Result<f64, ExprError> {
    let expr = parse(source)?;
    let value = expr.eval(bindings.map(|b| b.x))?;
    if !value.is_finite() {
        return Err(ExprError::NotFinite);
    }
    Ok(value)
}
