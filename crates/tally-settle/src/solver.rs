//! Solving share expressions for the proportional variable `x`.
//!
//! A share expression has at most one operator, so every share is affine in
//! `x`: `f(x) = constant + coefficient * x`. The solver reads the constant at
//! `x = 0` and the coefficient from `f(1) - f(0)`, then confirms the shape
//! with a third point so that `x*x` or `10/x` fail cleanly instead of
//! producing a wrong answer.

use tally_expr::{Expr, ExprError};
use thiserror::Error;
use tracing::debug;

/// Below this the coefficient of `x` counts as zero.
const COEFFICIENT_EPSILON: f64 = 1e-10;

/// Relative slack allowed by the linearity check.
const LINEARITY_TOLERANCE: f64 = 1e-9;

/// Errors from [`evaluate_shares`] and [`solve_shares`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettleError {
    #[error("share {index} is not a valid expression: {source}")]
    InvalidExpression {
        index: usize,
        #[source]
        source: ExprError,
    },

    #[error("cannot solve for x: {reason}")]
    UnsolvableShare { reason: &'static str },
}

impl SettleError {
    /// The index of the offending share, when there is one.
    pub fn index(&self) -> Option<usize> {
        match self {
            SettleError::InvalidExpression { index, .. } => Some(*index),
            SettleError::UnsolvableShare { .. } => None,
        }
    }
}

/// Parse share expressions and solve them against `total`.
///
/// ```
/// let shares = tally_settle::evaluate_shares(90.0, &["2x", "1x"]).unwrap();
/// assert_eq!(shares, vec![60.0, 30.0]);
/// ```
pub fn evaluate_shares<S: AsRef<str>>(total: f64, shares: &[S]) -> Result<Vec<f64>, SettleError> {
    let exprs = shares
        .iter()
        .enumerate()
        .map(|(index, share)| {
            tally_expr::parse(share.as_ref())
                .map_err(|source| SettleError::InvalidExpression { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    solve_shares(total, &exprs)
}

/// Solve parsed shares so that they add up to `total`.
///
/// Shares without `x` keep their value. When some shares use `x`, it is
/// chosen so that they cover what the fixed shares leave of `total`.
/// Fixed shares that are not finite propagate as NaN values for the caller
/// to reject.
pub fn solve_shares(total: f64, shares: &[Expr]) -> Result<Vec<f64>, SettleError> {
    let deferred: Vec<&Expr> = shares.iter().filter(|e| e.has_variable()).collect();
    if deferred.is_empty() {
        return Ok(shares.iter().map(|e| value_at(e, 0.0)).collect());
    }

    let fixed: f64 = shares
        .iter()
        .filter(|e| !e.has_variable())
        .map(|e| value_at(e, 0.0))
        .sum();
    let remaining = total - fixed;

    let sum_at = |x: f64| deferred.iter().map(|e| value_at(e, x)).sum::<f64>();
    let constant = sum_at(0.0);
    let coefficient = sum_at(1.0) - constant;

    if !constant.is_finite() || !coefficient.is_finite() {
        return Err(SettleError::UnsolvableShare {
            reason: "the shares are undefined for some value of x",
        });
    }
    if coefficient.abs() < COEFFICIENT_EPSILON {
        return Err(SettleError::UnsolvableShare {
            reason: "the coefficient of x is zero",
        });
    }
    let curvature = sum_at(2.0) - constant - 2.0 * coefficient;
    if !curvature.is_finite()
        || curvature.abs() > LINEARITY_TOLERANCE * (1.0 + coefficient.abs() + constant.abs())
    {
        return Err(SettleError::UnsolvableShare {
            reason: "the shares are not linear in x",
        });
    }

    let x = (remaining - constant) / coefficient;
    debug!(x, constant, coefficient, remaining, "solved proportional shares");

    Ok(shares.iter().map(|e| value_at(e, x)).collect())
}

/// Evaluate with `x` bound, which cannot fail.
fn value_at(expr: &Expr, x: f64) -> f64 {
    expr.eval(Some(x)).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_shares() {
        assert_eq!(evaluate_shares(90.0, &["2x", "1x"]).unwrap(), vec![60.0, 30.0]);
    }

    #[test]
    fn test_fixed_and_variable() {
        assert_eq!(evaluate_shares(90.0, &["30", "x"]).unwrap(), vec![30.0, 60.0]);
    }

    #[test]
    fn test_offset_shares() {
        assert_eq!(evaluate_shares(50.0, &["x+10", "x"]).unwrap(), vec![30.0, 20.0]);
        assert_eq!(evaluate_shares(30.0, &["x/2", "x"]).unwrap(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_all_fixed() {
        assert_eq!(evaluate_shares(90.0, &["50", "40"]).unwrap(), vec![50.0, 40.0]);
    }

    #[test]
    fn test_equal_thirds() {
        let shares = evaluate_shares(100.0, &["x", "x", "x"]).unwrap();
        let sum: f64 = shares.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((shares[0] - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_coefficient() {
        assert_eq!(
            evaluate_shares(90.0, &["0x", "10"]),
            Err(SettleError::UnsolvableShare {
                reason: "the coefficient of x is zero"
            })
        );
        assert!(matches!(
            evaluate_shares(90.0, &["x-x"]),
            Err(SettleError::UnsolvableShare { .. })
        ));
    }

    #[test]
    fn test_non_linear_shares() {
        assert_eq!(
            evaluate_shares(90.0, &["x*x"]),
            Err(SettleError::UnsolvableShare {
                reason: "the shares are not linear in x"
            })
        );
        assert!(matches!(
            evaluate_shares(90.0, &["10/x"]),
            Err(SettleError::UnsolvableShare { .. })
        ));
    }

    #[test]
    fn test_invalid_expression_index() {
        let err = evaluate_shares(90.0, &["x", "2y"]).unwrap_err();
        assert_eq!(err.index(), Some(1));
        assert!(matches!(err, SettleError::InvalidExpression { .. }));
    }
}
