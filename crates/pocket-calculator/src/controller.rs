//! Input/display controller
//!
//! Owns the display buffer and the arithmetic engine. Digit entry is handled
//! here; every other button commits the display to the engine.

use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::core::{ArithmeticEngine, Button, CalcError, Command, Digit, EngineState};

/// Text shown after a rejected division by zero
pub const ERROR_TEXT: &str = "Error";

/// Significant digits kept when rendering a non-integral result
const SIGNIFICANT_DIGITS: usize = 15;

/// The text on the display and the typing mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// Currently shown number
    pub text: String,
    /// Whether the next digit replaces the display instead of appending
    pub is_typing_fresh: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            text: "0".to_string(),
            is_typing_fresh: true,
        }
    }
}

/// A calculator session: one display, one engine
#[derive(Debug, Clone, Default)]
pub struct Controller {
    engine: ArithmeticEngine,
    display: DisplayState,
    last_input: Option<Button>,
    error: bool,
}

impl Controller {
    /// Creates a controller with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            engine: ArithmeticEngine::with_policy(config.division_policy),
            ..Self::default()
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display.text
    }

    /// Returns the full display state
    #[must_use]
    pub fn display_state(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the engine registers
    #[must_use]
    pub fn state(&self) -> &EngineState {
        self.engine.state()
    }

    /// Returns the last accepted button
    #[must_use]
    pub fn last_input(&self) -> Option<Button> {
        self.last_input
    }

    /// Returns true while the display shows [`ERROR_TEXT`]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Processes one button press
    ///
    /// Returns false if the press was rejected, which leaves the session
    /// untouched.
    pub fn receive_input(&mut self, button: Button) -> bool {
        let accepted = match button {
            Button::Digit(digit) => self.enter_digit(digit),
            Button::Decimal => self.enter_decimal(),
            Button::Command(command) => self.commit(command),
        };

        if accepted {
            self.last_input = Some(button);
        } else {
            tracing::trace!(%button, "input ignored");
        }
        accepted
    }

    /// Returns false for a zero typed onto a lone `0`
    fn enter_digit(&mut self, digit: Digit) -> bool {
        self.leave_error();

        let ch = digit.to_char();
        if self.display.is_typing_fresh {
            self.display.text = ch.to_string();
        } else if self.display.text == "0" {
            if ch == '0' {
                return false;
            }
            self.display.text = ch.to_string();
        } else {
            self.display.text.push(ch);
        }
        self.display.is_typing_fresh = false;
        tracing::trace!(display = %self.display.text, "digit entered");
        true
    }

    /// Returns false if the number being typed already has a decimal point
    fn enter_decimal(&mut self) -> bool {
        self.leave_error();

        if self.display.is_typing_fresh {
            self.display.text = "0.".to_string();
        } else if self.display.text.contains('.') {
            return false;
        } else {
            self.display.text.push('.');
        }
        self.display.is_typing_fresh = false;
        tracing::trace!(display = %self.display.text, "decimal point entered");
        true
    }

    /// Forwards a committing press to the engine; returns false if ignored
    fn commit(&mut self, command: Command) -> bool {
        if command == Command::Clear {
            self.reset();
            return true;
        }
        if self.error {
            return false;
        }
        if self.last_input.and_then(Button::as_operator).is_some() {
            return false;
        }

        let shown = self.displayed_number();
        match self.engine.apply(command, shown) {
            Ok(Some(value)) => self.display.text = format_number(value),
            Ok(None) => {}
            Err(CalcError::DivisionByZero) => self.enter_error(),
            Err(err) => panic!("engine returned a non-arithmetic error: {err}"),
        }
        self.display.is_typing_fresh = true;
        true
    }

    fn displayed_number(&self) -> f64 {
        match self.display.text.parse() {
            Ok(value) => value,
            Err(err) => panic!(
                "display invariant violated: {:?} is not a number ({err})",
                self.display.text
            ),
        }
    }

    fn reset(&mut self) {
        self.error = false;
        let zero = match self.engine.apply(Command::Clear, 0.0) {
            Ok(Some(value)) => value,
            other => panic!("all clear produced {other:?}"),
        };
        self.display = DisplayState {
            text: format_number(zero),
            is_typing_fresh: true,
        };
        tracing::debug!("all clear");
    }

    fn enter_error(&mut self) {
        self.engine.reset();
        self.display.text = ERROR_TEXT.to_string();
        self.error = true;
    }

    fn leave_error(&mut self) {
        if self.error {
            self.reset();
        }
    }
}

/// Renders a number the way the display shows it
///
/// Integral values have no decimal point. Other values are rounded to 15
/// significant digits, which hides float noise without losing typed input,
/// and printed in plain decimal notation. Negative zero renders as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() || value.fract() == 0.0 {
        return value.to_string();
    }

    let rounded = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    rounded.to_string()
}
