//! Core calculator module
//!
//! Error prevention: the closed set of buttons and operators is modeled as
//! enums, so an unknown operator cannot reach the evaluator.

mod button;
pub mod engine;
mod operations;

pub use button::{Button, Command, Digit};
pub use engine::{ArithmeticEngine, EngineState};
pub use operations::{DivisionPolicy, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// These are recoverable conditions. Broken internal invariants panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted under [`DivisionPolicy::Error`]
    #[error("Division by zero")]
    DivisionByZero,
    /// A keyboard character that maps to no button
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),
    /// Invalid calculator configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
