use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DrillError;

/// The four elementary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "x")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol drawn on the worksheet and printed in listings.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Pure arithmetic for this operator. Division is real division; the generator
    /// guarantees a non-zero divisor.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
        }
    }

    /// Parses a comma-separated operator list such as `+,-,x`.
    ///
    /// Duplicates collapse, first occurrence order is kept. An empty list is an error.
    pub fn parse_list(raw: &str) -> Result<Vec<Operator>, DrillError> {
        let mut operators = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let op: Operator = token.parse()?;
            if !operators.contains(&op) {
                operators.push(op);
            }
        }
        if operators.is_empty() {
            return Err(DrillError::validation("operator list must not be empty"));
        }
        Ok(operators)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" => Ok(Operator::Subtract),
            "x" | "X" | "*" | "×" | "mul" => Ok(Operator::Multiply),
            "/" | ":" | "÷" | "div" => Ok(Operator::Divide),
            other => Err(DrillError::validation(format!(
                "unknown operator '{other}', expected one of + - x /"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_operator() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), 10.0);
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), 4.0);
        assert_eq!(Operator::Multiply.apply(7.0, 3.0), 21.0);
        assert_eq!(Operator::Divide.apply(7.0, 2.0), 3.5);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!(" - ".parse::<Operator>().unwrap(), Operator::Subtract);
    }

    #[test]
    fn test_parse_unknown_is_validation_error() {
        let err = "%".parse::<Operator>().unwrap_err();
        assert!(matches!(err, DrillError::Validation(_)));
    }

    #[test]
    fn test_parse_list_dedups_in_order() {
        let ops = Operator::parse_list("x, +, x,/").unwrap();
        assert_eq!(
            ops,
            vec![Operator::Multiply, Operator::Add, Operator::Divide]
        );
    }

    #[test]
    fn test_parse_list_rejects_empty() {
        assert!(Operator::parse_list(" , ").is_err());
    }

    #[test]
    fn test_serde_uses_ascii_symbols() {
        let json = serde_json::to_string(&Operator::ALL).unwrap();
        assert_eq!(json, r#"["+","-","x","/"]"#);
    }
}
