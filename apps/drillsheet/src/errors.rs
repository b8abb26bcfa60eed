#![allow(dead_code)]

use thiserror::Error;

/// Crate-level error type.
/// Exercise construction and document export return `Result<T, DrillError>`; the binary
/// converts into `anyhow::Error` at the command boundary.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operand generator hit its retry cap without producing a usable pair.
    /// Raised when the configured range cannot satisfy the level's rule.
    #[error("Generation exhausted: no valid operand pair for level {level} after {attempts} attempts")]
    GenerationExhausted { level: u8, attempts: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DrillError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DrillError::Validation(msg.into())
    }

    /// Short machine-readable code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            DrillError::Validation(_) => "VALIDATION_ERROR",
            DrillError::GenerationExhausted { .. } => "GENERATION_EXHAUSTED",
            DrillError::Io(_) => "IO_ERROR",
            DrillError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_and_code() {
        let err = DrillError::validation("count must be at least 1");
        assert_eq!(err.to_string(), "Validation error: count must be at least 1");
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DrillError = io.into();
        assert!(matches!(err, DrillError::Io(_)));
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_exhausted_message_names_level() {
        let err = DrillError::GenerationExhausted {
            level: 2,
            attempts: 50,
        };
        assert!(err.to_string().contains("level 2"));
        assert!(err.to_string().contains("50 attempts"));
    }
}
