#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::errors::DrillError;

/// Inclusive bounds the free-form levels draw operands from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Result<Self, DrillError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DrillError::validation(format!(
                "value range bounds must be finite numbers, got [{min}, {max}]"
            )));
        }
        if min > max {
            return Err(DrillError::validation(format!(
                "minimum value {min} is greater than maximum value {max}"
            )));
        }
        if !(max - min).is_finite() {
            return Err(DrillError::validation(format!(
                "value range [{min}, {max}] is too wide to sample from"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Integer bounds inside the range, or `None` when no integer fits.
    pub fn integer_bounds(&self) -> Option<(i64, i64)> {
        let low = self.min.ceil() as i64;
        let high = self.max.floor() as i64;
        (low <= high).then_some((low, high))
    }
}

impl Default for ValueRange {
    /// `[1, 10]`, the range used when none is given.
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}
