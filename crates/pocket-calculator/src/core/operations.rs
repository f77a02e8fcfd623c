//! Binary arithmetic operators
//!
//! Error prevention: type-safe operator enum, evaluated with exhaustive matching

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult};

/// The four binary operators of a pocket calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators, in keypad column order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol as printed on the keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the name used in element ids and transcripts
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Applies the operator to two operands in entry order
    ///
    /// Division by zero follows `policy`.
    pub fn evaluate(self, lhs: f64, rhs: f64, policy: DivisionPolicy) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 && policy == DivisionPolicy::Error {
                    tracing::warn!(lhs, "division by zero rejected");
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What a division by zero produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// Fail with [`CalcError::DivisionByZero`]; the display shows `Error`
    #[default]
    Error,
    /// Plain IEEE-754 division; the display shows `inf`, `-inf` or `NaN`
    Ieee,
}

impl FromStr for DivisionPolicy {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "ieee" => Ok(Self::Ieee),
            other => Err(CalcError::Config(format!(
                "unknown division policy '{other}' (expected 'error' or 'ieee')"
            ))),
        }
    }
}

impl fmt::Display for DivisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Ieee => f.write_str("ieee"),
        }
    }
}
