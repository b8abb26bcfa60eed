#![allow(dead_code)]

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::errors::DrillError;
use crate::exercise::generator::OperandGenerator;
use crate::exercise::operation::Operation;
use crate::exercise::operator::Operator;
use crate::exercise::range::ValueRange;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 4;

/// Shared configuration for a batch of exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub count: usize,
    pub level: u8,
    /// `None` allows all four operators.
    pub operators: Option<Vec<Operator>>,
    pub range: ValueRange,
}

impl SessionConfig {
    pub fn new(count: usize, level: u8) -> Self {
        Self {
            count,
            level,
            operators: None,
            range: ValueRange::default(),
        }
    }

    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = Some(operators);
        self
    }

    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = range;
        self
    }
}

/// An ordered, read-only batch of operations generated under one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    level: u8,
    operators: Vec<Operator>,
    range: ValueRange,
    operations: Vec<Operation>,
}

impl Session {
    /// Validates the configuration, then generates `count` operations. Each operator
    /// is drawn independently and uniformly from the whitelist.
    ///
    /// Nothing is generated when validation fails; a generation failure discards the
    /// partial batch.
    pub fn new<R: Rng>(
        config: SessionConfig,
        generator: &mut OperandGenerator<R>,
    ) -> Result<Self, DrillError> {
        if config.count < 1 {
            return Err(DrillError::validation(format!(
                "exercise count must be at least 1, got {}",
                config.count
            )));
        }
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&config.level) {
            return Err(DrillError::validation(format!(
                "level must be between {MIN_LEVEL} and {MAX_LEVEL}, got {}",
                config.level
            )));
        }
        let operators = normalize_operators(config.operators)?;

        let mut operations = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let operator = *operators
                .choose(generator.rng_mut())
                .ok_or_else(|| DrillError::validation("operator whitelist is empty"))?;
            operations.push(Operation::build(
                config.level,
                (0.0, 0.0),
                Some(operator),
                &operators,
                &config.range,
                generator,
            )?);
        }

        info!(
            count = operations.len(),
            level = config.level,
            operators = operators.len(),
            "Session generated"
        );

        Ok(Self {
            level: config.level,
            operators,
            range: config.range,
            operations,
        })
    }

    pub fn count(&self) -> usize {
        self.operations.len()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, operation) in self.operations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{operation}")?;
        }
        Ok(())
    }
}

fn normalize_operators(operators: Option<Vec<Operator>>) -> Result<Vec<Operator>, DrillError> {
    let requested = operators.unwrap_or_else(|| Operator::ALL.to_vec());
    let mut whitelist: Vec<Operator> = Vec::with_capacity(requested.len());
    for op in requested {
        if !whitelist.contains(&op) {
            whitelist.push(op);
        }
    }
    if whitelist.is_empty() {
        return Err(DrillError::validation(
            "at least one operator must be allowed",
        ));
    }
    Ok(whitelist)
}
