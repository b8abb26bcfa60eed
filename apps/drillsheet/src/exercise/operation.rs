use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::errors::DrillError;
use crate::exercise::generator::OperandGenerator;
use crate::exercise::operator::Operator;
use crate::exercise::range::ValueRange;

/// One exercise. Immutable once built; `result` always equals `operator.apply(a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    level: u8,
    a: f64,
    b: f64,
    operator: Operator,
    result: f64,
}

impl Operation {
    /// Builds an operation from seed operands.
    ///
    /// - Seeds must be finite; a non-degenerate seed pair is kept as is.
    /// - `operator` must be in `allowed`; `None` picks uniformly from `allowed`.
    /// - Degenerate seeds (e.g. `(0, 0)`) are replaced by the level's generator.
    pub fn build<R: Rng>(
        level: u8,
        seed: (f64, f64),
        operator: Option<Operator>,
        allowed: &[Operator],
        range: &ValueRange,
        generator: &mut OperandGenerator<R>,
    ) -> Result<Self, DrillError> {
        let (seed_a, seed_b) = seed;
        if !seed_a.is_finite() {
            return Err(DrillError::validation("operand 'a' must be a finite number"));
        }
        if !seed_b.is_finite() {
            return Err(DrillError::validation("operand 'b' must be a finite number"));
        }

        let operator = match operator {
            Some(op) if allowed.contains(&op) => op,
            Some(op) => {
                return Err(DrillError::validation(format!(
                    "operator '{op}' is not in the allowed set"
                )))
            }
            None => *allowed
                .choose(generator.rng_mut())
                .ok_or_else(|| DrillError::validation("allowed operator set is empty"))?,
        };

        let (a, b) = generator.generate_from(seed, level, operator, range)?;
        Ok(Self::from_operands(level, a, b, operator))
    }

    fn from_operands(level: u8, a: f64, b: f64, operator: Operator) -> Self {
        Self {
            level,
            a,
            b,
            operator,
            result: operator.apply(a, b),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// The exercise without its answer: `a op b = ?`.
    pub fn prompt(&self) -> String {
        format!(
            "{} {} {} = ?",
            format_value(self.a),
            self.operator,
            format_value(self.b)
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_value(self.a),
            self.operator,
            format_value(self.b),
            format_value(self.result)
        )
    }
}

/// Whole numbers print without decimals, everything else with two.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
