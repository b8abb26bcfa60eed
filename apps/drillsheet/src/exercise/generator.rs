//! Difficulty-tiered operand generator.
//!
//! # Level rules
//! - Level 1: single digits in `[1, 10]`, `a >= b`, so subtraction never goes negative.
//! - Level 2: integer `a` from the range; each digit of `b` is at most the matching
//!   digit of `a`, so column subtraction never borrows.
//! - Level 3: real operands from the range; division is rebuilt as `b ∈ [1, 9]`,
//!   `a = b × k` with `k ∈ [1, 100]`, giving an exact integer quotient.
//! - Level 4 (and any unknown level): real operands; division replaces `b` with an
//!   integer in `[2, floor(min(a, b))]`.
//!
//! Candidates are redrawn while the pair is degenerate (`a == b`, `a == 0` or `b == 0`).
//! The retry loop is capped; running out of attempts means the range cannot satisfy
//! the level's rule and is reported as `DrillError::GenerationExhausted`.

use rand::Rng;
use tracing::warn;

use crate::errors::DrillError;
use crate::exercise::digits::{compose, decompose};
use crate::exercise::operator::Operator;
use crate::exercise::range::ValueRange;

// ────────────────────────────────────────────────────────────────────────────
// Constants
// ────────────────────────────────────────────────────────────────────────────

const LEVEL_ONE_MAX: u32 = 10;
const LEVEL_THREE_MAX_DIVISOR: u32 = 9;
const LEVEL_THREE_MAX_QUOTIENT: u32 = 100;
const LEVEL_FOUR_MIN_DIVISOR: i64 = 2;

/// A pair is degenerate when the operands are equal or either one is zero.
pub fn is_degenerate(a: f64, b: f64) -> bool {
    a == b || a == 0.0 || b == 0.0
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

/// Draws operand pairs from an injected random source.
pub struct OperandGenerator<R: Rng> {
    rng: R,
    max_attempts: u32,
}

impl<R: Rng> OperandGenerator<R> {
    pub fn new(rng: R, max_attempts: u32) -> Self {
        Self {
            rng,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The shared random source. Sessions draw operators from it so a single seed
    /// reproduces the whole sheet.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Produces a non-degenerate `(a, b)` pair for `level` and `operator`.
    pub fn generate(
        &mut self,
        level: u8,
        operator: Operator,
        range: &ValueRange,
    ) -> Result<(f64, f64), DrillError> {
        self.generate_from((0.0, 0.0), level, operator, range)
    }

    /// Keeps `seed` when it is already non-degenerate, otherwise redraws until a
    /// valid pair appears or the attempt cap is hit.
    pub fn generate_from(
        &mut self,
        seed: (f64, f64),
        level: u8,
        operator: Operator,
        range: &ValueRange,
    ) -> Result<(f64, f64), DrillError> {
        let (mut a, mut b) = seed;
        let mut attempts = 0u32;

        while is_degenerate(a, b) {
            if attempts >= self.max_attempts {
                warn!(
                    level,
                    operator = %operator,
                    min = range.min(),
                    max = range.max(),
                    attempts,
                    "Operand generation exhausted its retry budget"
                );
                return Err(DrillError::GenerationExhausted { level, attempts });
            }
            attempts += 1;

            if let Some((next_a, next_b)) = self.draw(level, operator, range) {
                a = next_a;
                b = next_b;
            }
        }

        Ok((a, b))
    }

    /// Draws a single candidate pair by the level's rule, without the degeneracy check.
    ///
    /// Returns `None` when the rule cannot form a pair from this draw (no integer in
    /// the range at level 2, or a level-4 divisor bound below 2); the caller counts it
    /// as a rejected attempt.
    pub fn draw(&mut self, level: u8, operator: Operator, range: &ValueRange) -> Option<(f64, f64)> {
        match level {
            1 => Some(self.draw_level_one()),
            2 => self.draw_level_two(range),
            3 => Some(self.draw_level_three(operator, range)),
            _ => self.draw_level_four(operator, range),
        }
    }

    fn draw_level_one(&mut self) -> (f64, f64) {
        let first = self.rng.gen_range(1..=LEVEL_ONE_MAX);
        let second = self.rng.gen_range(first..=LEVEL_ONE_MAX);
        // The second draw is never smaller, so it becomes `a`.
        (second as f64, first as f64)
    }

    fn draw_level_two(&mut self, range: &ValueRange) -> Option<(f64, f64)> {
        let (low, high) = range.integer_bounds()?;
        let a = self.rng.gen_range(low..=high);

        let digits_a = decompose(a.max(0) as u64);
        let digits_b: Vec<u8> = digits_a
            .iter()
            .map(|&d| self.rng.gen_range(0..=d))
            .collect();

        Some((a as f64, compose(&digits_b) as f64))
    }

    fn draw_level_three(&mut self, operator: Operator, range: &ValueRange) -> (f64, f64) {
        let a = self.uniform(range);
        let b = self.uniform(range);

        if operator == Operator::Divide {
            let divisor = self.rng.gen_range(1..=LEVEL_THREE_MAX_DIVISOR);
            let quotient = self.rng.gen_range(1..=LEVEL_THREE_MAX_QUOTIENT);
            return ((divisor * quotient) as f64, divisor as f64);
        }
        (a, b)
    }

    fn draw_level_four(&mut self, operator: Operator, range: &ValueRange) -> Option<(f64, f64)> {
        let a = self.uniform(range);
        let b = self.uniform(range);

        if operator == Operator::Divide {
            let upper = a.min(b).floor();
            if upper < LEVEL_FOUR_MIN_DIVISOR as f64 {
                return None;
            }
            let divisor = self.rng.gen_range(LEVEL_FOUR_MIN_DIVISOR..=upper as i64);
            return Some((a, divisor as f64));
        }
        Some((a, b))
    }

    fn uniform(&mut self, range: &ValueRange) -> f64 {
        self.rng.gen_range(range.min()..=range.max())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TRIALS: usize = 1000;

    fn generator(seed: u64) -> OperandGenerator<StdRng> {
        OperandGenerator::new(StdRng::seed_from_u64(seed), 10_000)
    }

    fn range(min: f64, max: f64) -> ValueRange {
        ValueRange::new(min, max).unwrap()
    }

    // ── non-degeneracy ──────────────────────────────────────────────────────

    #[test]
    fn test_all_levels_never_degenerate() {
        let mut gen = generator(1);
        let r = range(1.0, 100.0);
        for level in 1..=4u8 {
            for op in Operator::ALL {
                for _ in 0..TRIALS / 4 {
                    let (a, b) = gen.generate(level, op, &r).unwrap();
                    assert!(!is_degenerate(a, b), "level {level} {op}: {a} {b}");
                }
            }
        }
    }

    // ── level rules ─────────────────────────────────────────────────────────

    #[test]
    fn test_level_one_ordered_single_digits() {
        let mut gen = generator(2);
        for _ in 0..TRIALS {
            let (a, b) = gen.generate(1, Operator::Subtract, &range(1.0, 10.0)).unwrap();
            assert!(a >= b);
            assert!((1.0..=10.0).contains(&a) && (1.0..=10.0).contains(&b));
            assert_eq!(a.fract(), 0.0);
        }
    }

    #[test]
    fn test_level_one_ignores_range() {
        let mut gen = generator(3);
        let (a, b) = gen.generate(1, Operator::Add, &range(500.0, 900.0)).unwrap();
        assert!(a <= 10.0 && b <= 10.0);
    }

    #[test]
    fn test_level_two_never_borrows() {
        let mut gen = generator(4);
        for _ in 0..TRIALS {
            let (a, b) = gen.generate(2, Operator::Subtract, &range(10.0, 9999.0)).unwrap();
            let da = decompose(a as u64);
            let db = decompose(b as u64);
            assert!(db.len() <= da.len());
            // Right-align b under a and compare column by column.
            let offset = da.len() - db.len();
            for (i, digit_b) in db.iter().enumerate() {
                assert!(*digit_b <= da[offset + i], "borrow in {a} - {b}");
            }
            assert!(a > b);
        }
    }

    #[test]
    fn test_level_two_stays_in_integer_range() {
        let mut gen = generator(5);
        for _ in 0..TRIALS {
            let (a, _) = gen.generate(2, Operator::Add, &range(20.5, 60.2)).unwrap();
            assert!((21.0..=60.0).contains(&a));
            assert_eq!(a.fract(), 0.0);
        }
    }

    #[test]
    fn test_level_three_division_is_exact() {
        let mut gen = generator(6);
        for _ in 0..TRIALS {
            let (a, b) = gen.generate(3, Operator::Divide, &range(1.0, 100.0)).unwrap();
            assert!((1.0..=9.0).contains(&b));
            let quotient = a / b;
            assert_eq!(quotient.fract(), 0.0, "{a} / {b} is not exact");
            assert!((1.0..=100.0).contains(&quotient));
        }
    }

    #[test]
    fn test_level_three_free_form_within_range() {
        let mut gen = generator(7);
        for _ in 0..TRIALS {
            let (a, b) = gen.generate(3, Operator::Multiply, &range(5.0, 50.0)).unwrap();
            assert!((5.0..=50.0).contains(&a) && (5.0..=50.0).contains(&b));
        }
    }

    #[test]
    fn test_level_four_divisor_bounded_by_smaller_operand() {
        let mut gen = generator(8);
        for _ in 0..TRIALS {
            let (a, b) = gen.generate(4, Operator::Divide, &range(1.0, 100.0)).unwrap();
            assert_eq!(b.fract(), 0.0);
            assert!(b >= 2.0);
            assert!(b <= a.floor(), "divisor {b} exceeds dividend {a}");
        }
    }

    #[test]
    fn test_unknown_level_falls_back_to_level_four() {
        let mut fallback = generator(9);
        let mut level_four = generator(9);
        let r = range(1.0, 100.0);
        for _ in 0..50 {
            assert_eq!(
                fallback.generate(9, Operator::Divide, &r).unwrap(),
                level_four.generate(4, Operator::Divide, &r).unwrap()
            );
        }
    }

    // ── seeds and termination ───────────────────────────────────────────────

    #[test]
    fn test_valid_seed_is_kept() {
        let mut gen = generator(10);
        let pair = gen
            .generate_from((12.0, 5.0), 2, Operator::Add, &range(1.0, 10.0))
            .unwrap();
        assert_eq!(pair, (12.0, 5.0));
    }

    #[test]
    fn test_unsatisfiable_range_exhausts() {
        let mut gen = OperandGenerator::new(StdRng::seed_from_u64(11), 25);
        let err = gen
            .generate(3, Operator::Add, &range(5.0, 5.0))
            .unwrap_err();
        match err {
            DrillError::GenerationExhausted { level, attempts } => {
                assert_eq!(level, 3);
                assert_eq!(attempts, 25);
            }
            other => panic!("expected GenerationExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_level_two_without_integers_exhausts() {
        let mut gen = OperandGenerator::new(StdRng::seed_from_u64(12), 10);
        assert!(gen.generate(2, Operator::Add, &range(1.2, 1.8)).is_err());
    }

    #[test]
    fn test_level_four_small_range_division_exhausts() {
        let mut gen = OperandGenerator::new(StdRng::seed_from_u64(13), 10);
        assert!(gen.generate(4, Operator::Divide, &range(0.1, 1.9)).is_err());
    }

    #[test]
    fn test_same_seed_same_pairs() {
        let mut first = generator(14);
        let mut second = generator(14);
        let r = range(1.0, 1000.0);
        for level in 1..=4u8 {
            assert_eq!(
                first.generate(level, Operator::Add, &r).unwrap(),
                second.generate(level, Operator::Add, &r).unwrap()
            );
        }
    }
}
