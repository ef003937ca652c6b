use num_rational::Rational64;
use thiserror::Error;

use crate::expression::{ExpressionError, ParseError};

/// Why a candidate answer was rejected. Every variant is a classified,
/// recoverable outcome for the caller to render; none of them is a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The candidate is not a well-formed arithmetic expression.
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] ParseError),
    /// The candidate parses but has no defined value (division by zero or an
    /// out-of-range intermediate).
    #[error("invalid expression: {0}")]
    Undefined(#[from] ExpressionError),
    /// The candidate evaluates cleanly, just not to the target.
    #[error("expression evaluates to {value}, not {target}")]
    WrongValue { value: Rational64, target: i64 },
    /// The candidate reaches the target without using exactly the puzzle's
    /// numbers.
    #[error("expression does not use the puzzle's numbers exactly once each")]
    WrongNumbersUsed,
}
