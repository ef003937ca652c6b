use log::debug;
use serde::{Deserialize, Serialize};

use crate::checker::SolutionChecker;
use crate::puzzle::errors::BankError;

/// Cardinalities a puzzle may have.
const NUMBER_COUNTS: std::ops::RangeInclusive<usize> = 4..=6;
/// Range each drawn number must fall in.
const NUMBER_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Precomputed puzzles used when the combinatorial search comes up empty.
/// Every entry holds a valid solution for its numbers.
const BUILTIN: &[(&[i64], &str)] = &[
    (&[1, 2, 3, 4], "1 + 2 + 3 + 4"),
    (&[8, 4, 6, 2], "8 / 4 + 6 + 2"),
    (&[5, 5, 2, 1], "(5 + 5) * (2 - 1)"),
    (&[3, 7, 2, 1], "3 + 7 * (2 - 1)"),
    (&[9, 3, 4, 2], "9 + 3 - 4 + 2"),
    (&[6, 2, 5, 3], "6 * 2 - 5 + 3"),
    (&[5, 4, 3, 2, 1], "5 + 4 + 3 - 2 * 1"),
    (&[4, 6, 2, 3, 1], "4 + 6 + 2 - 3 + 1"),
    (&[3, 2, 2, 3, 1, 1], "3 * 2 + 2 + 3 - 1 * 1"),
    (&[6, 5, 4, 3, 2, 1], "6 + 5 + 4 - 3 - 2 * 1"),
];

/// A single fallback puzzle: numbers plus one known-good solution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BankEntry {
    pub numbers: Vec<i64>,
    pub solution: String,
}

/// Static, ordered list of precomputed puzzles.
///
/// The bank is configuration data, not generated logic: the built-in list
/// ships with the crate, and a collaborator can supply its own as JSON. Every
/// entry is validated on construction, so a selected entry can be served
/// without further checks.
#[derive(Debug, Clone)]
pub struct PuzzleBank {
    entries: Vec<BankEntry>,
}

impl PuzzleBank {
    /// The bank shipped with the crate.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(numbers, solution)| BankEntry {
                numbers: numbers.to_vec(),
                solution: (*solution).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Build a bank from caller-supplied entries, validating each one.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or any entry breaks the puzzle
    /// invariants: 4 to 6 numbers in [1,10], at least two distinct values,
    /// and a solution that reaches the target using every number exactly
    /// once.
    pub fn from_entries(entries: Vec<BankEntry>) -> Result<Self, BankError> {
        if entries.is_empty() {
            return Err(BankError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(entry).map_err(|reason| BankError::InvalidEntry { index, reason })?;
        }
        debug!("validated {} bank entries", entries.len());
        Ok(Self { entries })
    }

    /// Parse a bank from a JSON array of `{"numbers": [...], "solution": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or any invalid entry.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let entries: Vec<BankEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deterministic selection: the entry at `seed mod len`.
    pub fn select(&self, seed: u64) -> &BankEntry {
        let index = (seed % self.entries.len() as u64) as usize;
        &self.entries[index]
    }

    pub fn entries(&self) -> &[BankEntry] {
        &self.entries
    }
}

impl Default for PuzzleBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entry(entry: &BankEntry) -> Result<(), String> {
    if !NUMBER_COUNTS.contains(&entry.numbers.len()) {
        return Err(format!("expected 4 to 6 numbers, got {}", entry.numbers.len()));
    }
    if let Some(out_of_range) = entry.numbers.iter().find(|n| !NUMBER_RANGE.contains(*n)) {
        return Err(format!("number {} is outside [1,10]", out_of_range));
    }
    let mut distinct = entry.numbers.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return Err("fewer than two distinct values".to_string());
    }

    let report = SolutionChecker::new().check_numbers(&entry.solution, &entry.numbers);
    match report.reason {
        None => Ok(()),
        Some(reason) => Err(reason.to_string()),
    }
}
