use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's puzzle: the numbers to combine and a reference solution.
///
/// A puzzle is fully reconstructible from its date, so serialized copies are
/// caches, not sources of truth. The `date` field serializes as ISO
/// `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub date: NaiveDate,
    /// 4 to 6 integers in [1,10], in presentation order. The order carries no
    /// meaning for solutions: any arrangement that reaches the target is
    /// accepted.
    pub numbers: Vec<i64>,
    /// One valid expression using each number exactly once. A reference, not
    /// the only accepted answer.
    pub solution: String,
}

impl Puzzle {
    pub fn new(date: NaiveDate, numbers: Vec<i64>, solution: String) -> Self {
        Self { date, numbers, solution }
    }
}
