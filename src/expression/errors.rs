use thiserror::Error;

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("intermediate value out of range")]
    Overflow,
}

/// Errors that can occur while parsing a candidate expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    EmptyExpression,
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),
    #[error("expression ends unexpectedly")]
    UnexpectedEnd,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("number literal too large: {0}")]
    NumberTooLarge(String),
    #[error("expression is nested too deeply")]
    TooDeep,
}
