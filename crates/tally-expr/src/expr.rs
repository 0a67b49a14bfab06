//! Expression tree, parser and evaluation.

use crate::error::ExprError;
use crate::token::ExprToken;
use logos::Logos;

/// A parsed expression: one or two operands and an optional percent suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub lhs: Operand,
    pub rhs: Option<(BinOp, Operand)>,
    /// Whether the expression ends in `%`.
    pub percent: bool,
}

/// A single operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Number(f64),
    /// `x`, `2x`, `0.5x`
    Var { coefficient: f64 },
}

impl Operand {
    fn eval(&self, x: Option<f64>) -> Result<f64, ExprError> {
        match self {
            Operand::Number(n) => Ok(*n),
            Operand::Var { coefficient } => x
                .map(|x| coefficient * x)
                .ok_or(ExprError::UnboundVariable),
        }
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn from_token(token: &ExprToken) -> Option<Self> {
        match token {
            ExprToken::Plus => Some(BinOp::Add),
            ExprToken::Minus => Some(BinOp::Sub),
            ExprToken::Star => Some(BinOp::Mul),
            ExprToken::Slash => Some(BinOp::Div),
            _ => None,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
        }
    }
}

impl Expr {
    /// Check if this expression references `x`.
    pub fn has_variable(&self) -> bool {
        matches!(self.lhs, Operand::Var { .. })
            || matches!(self.rhs, Some((_, Operand::Var { .. })))
    }

    /// The percentage of a `<number><op><number>%` expression as a fraction.
    pub fn percent_modifier(&self) -> Option<f64> {
        match (self.percent, self.rhs) {
            (true, Some((_, Operand::Number(percent)))) => Some(percent / 100.0),
            _ => None,
        }
    }

    /// Evaluate with an optional value for `x`.
    ///
    /// Division by zero yields an infinite or NaN result rather than an
    /// error; callers decide whether that is acceptable.
    pub fn eval(&self, x: Option<f64>) -> Result<f64, ExprError> {
        let lhs = self.lhs.eval(x)?;
        let Some((op, rhs)) = self.rhs else {
            // `number%` with no operator is the number itself
            return Ok(lhs);
        };
        let rhs = rhs.eval(x)?;

        if !self.percent {
            return Ok(op.apply(lhs, rhs));
        }

        let fraction = rhs / 100.0;
        Ok(match op {
            BinOp::Add => lhs + lhs * fraction,
            BinOp::Sub => lhs - lhs * fraction,
            BinOp::Mul => lhs * fraction,
            BinOp::Div => lhs / fraction,
        })
    }
}

/// Parse an expression.
pub fn parse(source: &str) -> Result<Expr, ExprError> {
    let mut tokens = Vec::new();
    for (result, span) in ExprToken::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(ExprError::UnexpectedChar { span }),
        }
    }

    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = ExprParser {
        tokens,
        pos: 0,
        len: source.len(),
    };
    let expr = parser.parse_expr()?;
    if let Some((_, span)) = parser.peek() {
        return Err(ExprError::TrailingInput { span: span.clone() });
    }
    Ok(expr)
}

struct ExprParser {
    tokens: Vec<(ExprToken, std::ops::Range<usize>)>,
    pos: usize,
    len: usize,
}

impl ExprParser {
    fn peek(&self) -> Option<&(ExprToken, std::ops::Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn check(&self, kind: &ExprToken) -> bool {
        self.peek()
            .is_some_and(|(token, _)| std::mem::discriminant(token) == std::mem::discriminant(kind))
    }

    fn advance(&mut self) -> Option<ExprToken> {
        let token = self.tokens.get(self.pos).map(|(token, _)| *token);
        self.pos += 1;
        token
    }

    fn current_span(&self) -> std::ops::Range<usize> {
        self.peek()
            .map(|(_, span)| span.clone())
            .unwrap_or(self.len..self.len)
    }

    fn expected(&self, expected: &'static str) -> ExprError {
        ExprError::Expected {
            expected,
            span: self.current_span(),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        if self.check(&ExprToken::LParen) {
            self.advance();
            let inner = self.parse_expr()?;
            if !self.check(&ExprToken::RParen) {
                return Err(self.expected("')'"));
            }
            self.advance();
            return Ok(inner);
        }

        let lhs = self.parse_operand()?;

        let rhs = match self.peek().and_then(|(token, _)| BinOp::from_token(token)) {
            Some(op) => {
                self.advance();
                Some((op, self.parse_operand()?))
            }
            None => None,
        };

        let percent = self.check(&ExprToken::Percent);
        if percent {
            self.advance();
        }

        Ok(Expr { lhs, rhs, percent })
    }

    fn parse_operand(&mut self) -> Result<Operand, ExprError> {
        match self.peek().map(|(token, _)| *token) {
            Some(ExprToken::Number(n)) => {
                self.advance();
                if self.check(&ExprToken::Var) {
                    self.advance();
                    Ok(Operand::Var { coefficient: n })
                } else {
                    Ok(Operand::Number(n))
                }
            }
            Some(ExprToken::Var) => {
                self.advance();
                Ok(Operand::Var { coefficient: 1.0 })
            }
            _ => Err(self.expected("number or x")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, Bindings};

    fn eval(source: &str) -> f64 {
        evaluate(source, None).unwrap()
    }

    #[test]
    fn test_percentage_arithmetic() {
        assert_eq!(eval("100+25%"), 125.0);
        assert_eq!(eval("100-10%"), 90.0);
        assert_eq!(eval("200*5%"), 10.0);
        assert_eq!(eval("200/50%"), 400.0);
    }

    #[test]
    fn test_bare_percent_is_unchanged() {
        assert_eq!(eval("40%"), 40.0);
        assert_eq!(eval("12.5%"), 12.5);
    }

    #[test]
    fn test_plain_operators() {
        assert_eq!(eval("100"), 100.0);
        assert_eq!(eval("12.5+7.5"), 20.0);
        assert_eq!(eval("10-4"), 6.0);
        assert_eq!(eval("6*7"), 42.0);
        assert_eq!(eval("90/4"), 22.5);
        assert_eq!(eval(" 6 * 7 "), 42.0);
        assert_eq!(eval("(100+25%)"), 125.0);
    }

    #[test]
    fn test_percent_modifier() {
        assert_eq!(parse("100+25%").unwrap().percent_modifier(), Some(0.25));
        assert_eq!(parse("100+25").unwrap().percent_modifier(), None);
        assert_eq!(parse("25%").unwrap().percent_modifier(), None);
    }

    #[test]
    fn test_variable() {
        let x = Bindings { x: 30.0 };
        assert_eq!(evaluate("2x", Some(&x)).unwrap(), 60.0);
        assert_eq!(evaluate("x", Some(&x)).unwrap(), 30.0);
        assert_eq!(evaluate("x+10", Some(&x)).unwrap(), 40.0);
        assert_eq!(evaluate("x*2", Some(&x)).unwrap(), 60.0);
        assert!(parse("1x").unwrap().has_variable());
        assert!(!parse("10").unwrap().has_variable());
    }

    #[test]
    fn test_unbound_variable() {
        assert_eq!(evaluate("2x", None), Err(ExprError::UnboundVariable));
    }

    #[test]
    fn test_rejects_chains_and_junk() {
        assert!(matches!(
            evaluate("1+2+3", None),
            Err(ExprError::TrailingInput { .. })
        ));
        assert!(matches!(
            evaluate("1+", None),
            Err(ExprError::Expected { .. })
        ));
        assert!(matches!(
            evaluate("abc", None),
            Err(ExprError::UnexpectedChar { .. })
        ));
        assert!(matches!(
            evaluate("(1+2", None),
            Err(ExprError::Expected { expected: "')'", .. })
        ));
        assert_eq!(evaluate("", None), Err(ExprError::Empty));
        assert_eq!(evaluate("   ", None), Err(ExprError::Empty));
    }

    #[test]
    fn test_division_by_zero_is_not_finite() {
        assert_eq!(evaluate("1/0", None), Err(ExprError::NotFinite));
        assert!(parse("1/0").unwrap().eval(None).unwrap().is_infinite());
    }
}
