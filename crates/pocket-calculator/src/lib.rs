//! Pocket Calculator
//!
//! A four-function calculator that behaves like the one in your pocket:
//! one pending operation, strict left-to-right evaluation, repeated equals.
//!
//! # Components
//!
//! - **Arithmetic engine** ([`core::ArithmeticEngine`]): the pending-operand
//!   state machine. It only ever sees committing buttons.
//! - **Controller** ([`controller::Controller`]): owns the display text and
//!   the engine, handles digit entry, formats results.
//! - **Keypad** and **driver**: the layout and key mapping shared by front
//!   ends, and a driver trait to replay key sequences against any of them.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Controller::new();
//! for key in "2 + 3 * 4 =".chars().filter_map(Keypad::key_to_button) {
//!     calc.receive_input(key);
//! }
//! // No precedence: (2 + 3) * 4
//! assert_eq!(calc.display(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::controller::{format_number, Controller, DisplayState, ERROR_TEXT};
    pub use crate::core::{
        ArithmeticEngine, Button, CalcError, CalcResult, Command, Digit, DivisionPolicy,
        EngineState, Operator,
    };
    pub use crate::driver::{CalculatorDriver, TranscriptDriver, TranscriptEntry};
    pub use crate::keypad::{Keypad, KeypadButton};
}
