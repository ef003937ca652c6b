use log::debug;
use num_rational::Rational64;
use num_traits::ToPrimitive;

use crate::TARGET;
use crate::checker::errors::CheckError;
use crate::expression::parse_expression;
use crate::puzzle::Puzzle;

/// Outcome of checking one candidate answer.
///
/// `ok` is true only when the expression both reaches the target and uses
/// exactly the puzzle's numbers. The other fields are reported independently
/// so a front end can tell the player *which* part went wrong:
/// `numbers_used_correctly` is meaningful whenever the candidate parses, and
/// `value` is present whenever the candidate has a defined value.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub ok: bool,
    pub numbers_used_correctly: bool,
    pub value: Option<f64>,
    pub reason: Option<CheckError>,
}

impl CheckReport {
    fn rejected(reason: CheckError) -> Self {
        Self { ok: false, numbers_used_correctly: false, value: None, reason: Some(reason) }
    }
}

/// Validates candidate expressions against a puzzle.
///
/// Candidates are parsed with the crate's restricted arithmetic parser;
/// there is no dynamic evaluation path, so a hostile string can at worst be
/// classified as invalid.
#[derive(Debug, Clone, Default)]
pub struct SolutionChecker {}

impl SolutionChecker {
    pub fn new() -> Self {
        Self {}
    }

    /// Check `expression` against `puzzle`.
    pub fn check(&self, expression: &str, puzzle: &Puzzle) -> CheckReport {
        self.check_numbers(expression, &puzzle.numbers)
    }

    /// Check `expression` against a bare number multiset. `check` delegates
    /// here; bank validation uses it directly.
    pub fn check_numbers(&self, expression: &str, numbers: &[i64]) -> CheckReport {
        let expr = match parse_expression(expression) {
            Ok(expr) => expr,
            Err(e) => {
                debug!("candidate rejected at parse: {}", e);
                return CheckReport::rejected(e.into());
            }
        };

        let numbers_used_correctly = multiset_matches(&expr.literals(), numbers);

        let value = match expr.evaluate() {
            Ok(value) => value,
            Err(e) => {
                debug!("candidate rejected at evaluation: {}", e);
                return CheckReport {
                    ok: false,
                    numbers_used_correctly,
                    value: None,
                    reason: Some(e.into()),
                };
            }
        };

        let reason = if value != Rational64::from_integer(TARGET) {
            Some(CheckError::WrongValue { value, target: TARGET })
        } else if !numbers_used_correctly {
            Some(CheckError::WrongNumbersUsed)
        } else {
            None
        };

        CheckReport {
            ok: reason.is_none(),
            numbers_used_correctly,
            value: value.to_f64(),
            reason,
        }
    }
}

/// Multiset equality: same count of each value, order ignored.
fn multiset_matches(used: &[i64], expected: &[i64]) -> bool {
    let mut used = used.to_vec();
    let mut expected = expected.to_vec();
    used.sort_unstable();
    expected.sort_unstable();
    used == expected
}
