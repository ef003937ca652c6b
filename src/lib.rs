//! Decem - the daily "make ten" puzzle core
//!
//! Given a calendar date, [`PuzzleGenerator`] deterministically derives 4 to
//! 6 integers in [1,10] that can be combined - each used exactly once, with
//! the four basic operators and parentheses - to reach exactly 10, along
//! with one reference solution. [`SolutionChecker`] classifies a player's
//! candidate expression against that puzzle.
//!
//! Both components are pure: no I/O, no platform randomness, no shared
//! state. The same date produces bit-identical puzzles on every machine,
//! which is what makes a worldwide daily challenge possible.

pub mod checker;
pub mod expression;
pub mod generator;
pub mod puzzle;

// Re-export the main public API
pub use checker::{CheckError, CheckReport, SolutionChecker};
pub use expression::{Expression, ExpressionError, ParseError, parse_expression};
pub use generator::{PuzzleGenerator, date_seed};
pub use puzzle::{BankEntry, BankError, Puzzle, PuzzleBank};

/// The value every puzzle's numbers must combine to.
pub const TARGET: i64 = 10;

/// Generate the puzzle for the given date.
///
/// Convenience wrapper around a [`PuzzleGenerator`] with the built-in
/// fallback bank. Deterministic: the same date always yields the same
/// puzzle.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use decem::generate_daily_puzzle;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let puzzle = generate_daily_puzzle(date);
///
/// assert!((4..=6).contains(&puzzle.numbers.len()));
/// assert_eq!(puzzle, generate_daily_puzzle(date));
/// ```
pub fn generate_daily_puzzle(date: chrono::NaiveDate) -> Puzzle {
    PuzzleGenerator::new().generate(date)
}

/// Check a candidate expression against a puzzle.
///
/// Convenience wrapper around a [`SolutionChecker`]. The result is always a
/// classified report, never a fault, whatever the input string contains.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use decem::{check_solution, generate_daily_puzzle};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
/// let puzzle = generate_daily_puzzle(date);
///
/// // The reference solution always validates against its own puzzle.
/// assert!(check_solution(&puzzle.solution, &puzzle).ok);
/// ```
pub fn check_solution(expression: &str, puzzle: &Puzzle) -> CheckReport {
    SolutionChecker::new().check(expression, puzzle)
}
