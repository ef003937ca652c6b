use chrono::NaiveDate;

use crate::checker::SolutionChecker;
use crate::generator::search::{find_solution, permutations};
use crate::generator::{PuzzleGenerator, SeededRng, date_seed};
use crate::puzzle::PuzzleBank;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn test_date_seed_concatenates_digits() {
    assert_eq!(date_seed(day(2024, 6, 1)), 20240601);
    assert_eq!(date_seed(day(1999, 12, 31)), 19991231);
    assert_eq!(date_seed(day(2025, 1, 9)), 20250109);
}

#[test]
fn test_rng_is_reproducible() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(42);
    let draws_a: Vec<usize> = (0..8).map(|_| a.next_index(1000)).collect();
    let draws_b: Vec<usize> = (0..8).map(|_| b.next_index(1000)).collect();
    assert_eq!(draws_a, draws_b);

    // pinned outputs: any change to the constants or the draw path shows up here
    assert_eq!(&draws_a[..4], &[669, 53, 77, 7]);
}

#[test]
fn test_rng_seeds_diverge() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(43);
    let draws_a: Vec<usize> = (0..4).map(|_| a.next_index(1000)).collect();
    let draws_b: Vec<usize> = (0..4).map(|_| b.next_index(1000)).collect();
    assert_eq!(draws_b, vec![602, 511, 596, 275]);
    assert_ne!(draws_a, draws_b);
}

#[test]
fn test_rng_draws_stay_in_range() {
    let mut rng = SeededRng::new(123_456);
    for _ in 0..200 {
        let n = rng.next_in(1, 10);
        assert!((1..=10).contains(&n));
    }
}

#[test]
fn test_rng_shuffle_is_deterministic() {
    let mut items = vec![1, 2, 3, 4, 5];
    SeededRng::new(7).shuffle(&mut items);
    assert_eq!(items, vec![5, 3, 1, 4, 2]);

    let mut again = vec![1, 2, 3, 4, 5];
    SeededRng::new(7).shuffle(&mut again);
    assert_eq!(items, again);
}

#[test]
fn test_permutations_fixed_order() {
    let perms = permutations(&[1, 2, 3]);
    assert_eq!(
        perms,
        vec![
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ]
    );
}

#[test]
fn test_find_solution_simple_sum() {
    let result = find_solution(&[2, 3, 4, 1]);
    assert!(result.is_some());
    if let Some((ordering, expr)) = result {
        let mut sorted = ordering.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
        let report = SolutionChecker::new().check_numbers(&expr.to_string(), &ordering);
        assert!(report.ok, "search produced a non-verifying solution: {}", expr);
    }
}

#[test]
fn test_find_solution_unreachable_target() {
    // four 1s can never combine to 10
    assert!(find_solution(&[1, 1, 1, 1]).is_none());
}

#[test]
fn test_generate_is_deterministic() {
    let date = day(2024, 6, 1);
    let a = PuzzleGenerator::new().generate(date);
    let b = PuzzleGenerator::new().generate(date);
    assert_eq!(a, b);
}

#[test]
fn test_generate_example_date() {
    // 2024-06-01 seeds to 20240601; the first draw is 4 numbers {7,9,9,10}
    let puzzle = PuzzleGenerator::new().generate(day(2024, 6, 1));
    let mut numbers = puzzle.numbers.clone();
    numbers.sort_unstable();
    assert_eq!(numbers, vec![7, 9, 9, 10]);
}

#[test]
fn test_generate_invariants_over_date_sweep() {
    let generator = PuzzleGenerator::new();
    let checker = SolutionChecker::new();

    for date in day(2024, 1, 1).iter_days().take(45) {
        let puzzle = generator.generate(date);
        assert_eq!(puzzle.date, date);
        assert!(
            (4..=6).contains(&puzzle.numbers.len()),
            "{}: bad cardinality {:?}",
            date,
            puzzle.numbers
        );
        assert!(
            puzzle.numbers.iter().all(|n| (1..=10).contains(n)),
            "{}: number out of range in {:?}",
            date,
            puzzle.numbers
        );
        assert!(
            puzzle.numbers.iter().any(|n| *n != puzzle.numbers[0]),
            "{}: degenerate numbers {:?}",
            date,
            puzzle.numbers
        );

        let report = checker.check(&puzzle.solution, &puzzle);
        assert!(
            report.ok,
            "{}: reference solution '{}' rejected: {:?}",
            date, puzzle.solution, report.reason
        );
    }
}

#[test]
fn test_fallback_serves_valid_deterministic_puzzle() {
    let generator = PuzzleGenerator::new();
    let date = day(2024, 6, 1);
    let seed = date_seed(date);

    let a = generator.fallback(date, seed, &mut SeededRng::new(seed));
    let b = generator.fallback(date, seed, &mut SeededRng::new(seed));
    assert_eq!(a, b);

    assert!((4..=6).contains(&a.numbers.len()));
    let report = SolutionChecker::new().check(&a.solution, &a);
    assert!(report.ok, "fallback solution '{}' rejected: {:?}", a.solution, report.reason);
}

#[test]
fn test_fallback_index_wraps_by_seed() {
    let generator = PuzzleGenerator::new();
    let date = day(2024, 6, 1);
    let len = PuzzleBank::builtin().len() as u64;

    // seeds in the same residue class pick the same bank slot
    let a = generator.fallback(date, 3, &mut SeededRng::new(99));
    let b = generator.fallback(date, 3 + len, &mut SeededRng::new(99));
    assert_eq!(a, b);
}
