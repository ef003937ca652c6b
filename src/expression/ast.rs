use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::errors::ExpressionError;

/// Arithmetic expressions restricted to integer literals, the four basic
/// operators, and unary minus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
}

impl Expression {
    /// Every integer literal in the tree, left to right.
    pub fn literals(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals(&self, out: &mut Vec<i64>) {
        match self {
            Expression::Number(n) => out.push(*n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                l.collect_literals(out);
                r.collect_literals(out);
            }
            Expression::Neg(e) => e.collect_literals(out),
        }
    }
}

/// The four binary operators, in the canonical enumeration order used by the
/// generator's search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Apply the operator with checked rational arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error on division by zero or when an intermediate value
    /// leaves the representable range.
    pub fn apply(self, left: Rational64, right: Rational64) -> Result<Rational64, ExpressionError> {
        match self {
            Op::Add => left.checked_add(&right).ok_or(ExpressionError::Overflow),
            Op::Sub => left.checked_sub(&right).ok_or(ExpressionError::Overflow),
            Op::Mul => left.checked_mul(&right).ok_or(ExpressionError::Overflow),
            Op::Div => {
                if right.is_zero() {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    left.checked_div(&right).ok_or(ExpressionError::Overflow)
                }
            }
        }
    }

    /// Build the AST node for this operator.
    pub fn node(self, left: Expression, right: Expression) -> Expression {
        let (left, right) = (Box::new(left), Box::new(right));
        match self {
            Op::Add => Expression::Add(left, right),
            Op::Sub => Expression::Sub(left, right),
            Op::Mul => Expression::Mul(left, right),
            Op::Div => Expression::Div(left, right),
        }
    }
}
