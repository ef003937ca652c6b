use log::trace;
use num_rational::Rational64;

use crate::expression::ast::{Expression, Op};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluate the expression exactly, as a rational number.
    ///
    /// Division is real-valued: `7 / 2` is `7/2`, not `3`. Equality checks
    /// against the result are exact, with no epsilon.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - Any operation whose result leaves the representable range
    pub fn evaluate(&self) -> Result<Rational64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(Rational64::from_integer(*n)),
            Expression::Add(l, r) => Op::Add.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => Op::Sub.apply(l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => Op::Mul.apply(l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => Op::Div.apply(l.evaluate()?, r.evaluate()?),
            Expression::Neg(e) => Ok(-e.evaluate()?),
        };

        if let Err(e) = &result {
            trace!("evaluation of {} failed: {}", self, e);
        }

        result
    }
}
