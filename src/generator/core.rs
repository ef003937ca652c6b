use chrono::NaiveDate;
use log::{debug, info};

use crate::generator::errors::GenerationError;
use crate::generator::rng::{SeededRng, date_seed};
use crate::generator::search::find_solution;
use crate::puzzle::{Puzzle, PuzzleBank};

/// Distinct draw attempts per date before falling back to the bank. The
/// search itself is exhaustive, so a failed attempt means the drawn set
/// genuinely has no solution (or was degenerate).
const MAX_ATTEMPTS: u32 = 6;

/// Deterministic daily puzzle generator.
///
/// `generate` is a pure function of the date: every client worldwide derives
/// the same seed and therefore the same puzzle. It always produces a puzzle;
/// search exhaustion is absorbed by the fallback bank.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    bank: PuzzleBank,
}

impl PuzzleGenerator {
    /// Generator backed by the built-in fallback bank.
    pub fn new() -> Self {
        Self { bank: PuzzleBank::builtin() }
    }

    /// Generator backed by a caller-supplied fallback bank.
    pub fn with_bank(bank: PuzzleBank) -> Self {
        Self { bank }
    }

    /// Produce the puzzle for `date`.
    pub fn generate(&self, date: NaiveDate) -> Puzzle {
        let seed = date_seed(date);
        let mut rng = SeededRng::new(seed);
        info!("generating puzzle for {} (seed {})", date, seed);

        match self.draw_and_search(&mut rng) {
            Ok((numbers, solution)) => Puzzle::new(date, numbers, solution),
            Err(GenerationError::Exhausted { attempts }) => {
                debug!("search exhausted after {} attempts, using bank", attempts);
                self.fallback(date, seed, &mut rng)
            }
        }
    }

    /// Draw candidate number sets from the seeded stream until one admits a
    /// solution, up to the attempt cap.
    fn draw_and_search(
        &self,
        rng: &mut SeededRng,
    ) -> Result<(Vec<i64>, String), GenerationError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let count = 4 + rng.next_index(3);
            let numbers: Vec<i64> = (0..count).map(|_| rng.next_in(1, 10)).collect();

            if !has_two_distinct(&numbers) {
                debug!("attempt {}: degenerate draw {:?}", attempt, numbers);
                continue;
            }

            if let Some((ordering, expr)) = find_solution(&numbers) {
                debug!("attempt {}: {:?} solved by {}", attempt, ordering, expr);
                return Ok((ordering, expr.to_string()));
            }
            debug!("attempt {}: no solution for {:?}", attempt, numbers);
        }

        Err(GenerationError::Exhausted { attempts: MAX_ATTEMPTS })
    }

    /// Serve a bank entry, selected by the seed. The displayed number order
    /// is shuffled with the same seeded stream so the fallback stays as
    /// reproducible as the searched path.
    pub(crate) fn fallback(&self, date: NaiveDate, seed: u64, rng: &mut SeededRng) -> Puzzle {
        let entry = self.bank.select(seed);
        let mut numbers = entry.numbers.clone();
        rng.shuffle(&mut numbers);
        info!("fallback puzzle {:?} for {}", numbers, date);
        Puzzle::new(date, numbers, entry.solution.clone())
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn has_two_distinct(numbers: &[i64]) -> bool {
    numbers.iter().any(|n| *n != numbers[0])
}
