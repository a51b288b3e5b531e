use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

#[inline]
pub(crate) fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when the expression:
    /// - divides by zero
    /// - produces an infinite or NaN value at any node
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => apply_checked(Operator::Add, l, r),
            Expression::Sub(l, r) => apply_checked(Operator::Sub, l, r),
            Expression::Mul(l, r) => apply_checked(Operator::Mul, l, r),
            Expression::Div(l, r) => {
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Division by zero attempted in {}", self);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    let left = l.evaluate()?;
                    finite(left / right)
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}

fn apply_checked(op: Operator, l: &Expression, r: &Expression) -> Result<f64, ExpressionError> {
    let left = l.evaluate()?;
    let right = r.evaluate()?;
    finite(op.apply(left, right))
}

fn finite(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NonFinite)
    }
}
