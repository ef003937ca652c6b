use num_rational::Rational64;
use rayon::prelude::*;

use crate::TARGET;
use crate::expression::{Expression, Op};

/// All orderings of `values`, in a fixed recursive order: for each index i,
/// `values[i]` is placed first, followed by every ordering of the rest. The
/// order is part of the determinism contract: together with the operator and
/// shape enumeration below it defines which solution wins the tie-break.
pub(crate) fn permutations(values: &[i64]) -> Vec<Vec<i64>> {
    if values.len() <= 1 {
        return vec![values.to_vec()];
    }
    let mut result = Vec::new();
    for (i, &first) in values.iter().enumerate() {
        let mut rest = values.to_vec();
        rest.remove(i);
        for tail in permutations(&rest) {
            let mut ordering = Vec::with_capacity(values.len());
            ordering.push(first);
            ordering.extend(tail);
            result.push(ordering);
        }
    }
    result
}

/// Decode combination `index` into `len` operators, leftmost slot most
/// significant, so indices enumerate assignments lexicographically over
/// `Op::ALL`.
fn decode_ops(index: usize, len: usize) -> Vec<Op> {
    (0..len)
        .map(|slot| Op::ALL[(index >> (2 * (len - 1 - slot))) & 3])
        .collect()
}

/// The left-to-right chain `(((a . b) . c) . d)`.
fn chain(ordering: &[i64], ops: &[Op]) -> Expression {
    let mut expr = Expression::Number(ordering[0]);
    for (op, &value) in ops.iter().zip(&ordering[1..]) {
        expr = op.node(expr, Expression::Number(value));
    }
    expr
}

/// Candidate parenthesizations for one ordering and operator assignment.
///
/// Every cardinality gets the left-to-right chain. Four operands additionally
/// get the remaining binary-tree shapes, so all parenthesizations of the
/// common 4-number case are covered. The list order is fixed.
fn candidates(ordering: &[i64], ops: &[Op]) -> Vec<Expression> {
    if ordering.len() != 4 {
        return vec![chain(ordering, ops)];
    }

    let n = |i: usize| Expression::Number(ordering[i]);
    let [op1, op2, op3] = [ops[0], ops[1], ops[2]];
    vec![
        // ((a . b) . c) . d
        op3.node(op2.node(op1.node(n(0), n(1)), n(2)), n(3)),
        // (a . b) . (c . d)
        op2.node(op1.node(n(0), n(1)), op3.node(n(2), n(3))),
        // a . (b . (c . d))
        op1.node(n(0), op2.node(n(1), op3.node(n(2), n(3)))),
        // (a . (b . c)) . d
        op3.node(op1.node(n(0), op2.node(n(1), n(2))), n(3)),
        // a . ((b . c) . d)
        op1.node(n(0), op3.node(op2.node(n(1), n(2)), n(3))),
    ]
}

/// Exhaustively search one ordering: all operator assignments, all candidate
/// shapes, in fixed order. First expression equal to the target wins.
fn search_ordering(ordering: &[i64]) -> Option<Expression> {
    let target = Rational64::from_integer(TARGET);
    let slots = ordering.len() - 1;

    for index in 0..4usize.pow(slots as u32) {
        let ops = decode_ops(index, slots);
        for expr in candidates(ordering, &ops) {
            if expr.evaluate() == Ok(target) {
                return Some(expr);
            }
        }
    }
    None
}

/// Search every ordering of `numbers` for an expression reaching the target.
///
/// Orderings are searched in parallel, but only the first match in
/// enumeration order is kept, so the result is identical to a sequential
/// scan. Returns the winning ordering (the puzzle's presentation order)
/// together with its expression.
pub(crate) fn find_solution(numbers: &[i64]) -> Option<(Vec<i64>, Expression)> {
    permutations(numbers)
        .into_par_iter()
        .find_map_first(|ordering| {
            search_ordering(&ordering).map(|expr| (ordering, expr))
        })
}
