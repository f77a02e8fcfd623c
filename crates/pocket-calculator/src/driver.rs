//! Unified Calculator Driver
//!
//! Write a key-sequence scenario once and replay it against any front end.
//!
//! Balanced testing: the same specifications run against the bare
//! [`Controller`] and against the recording [`TranscriptDriver`].

use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::controller::Controller;
use crate::core::{Button, CalcResult};
use crate::keypad::Keypad;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calculator::prelude::*;
///
/// fn three_plus_four<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_keys("3 + 4 =").unwrap();
///     assert_eq!(driver.display(), "7");
/// }
///
/// three_plus_four(&mut Controller::new());
/// three_plus_four(&mut TranscriptDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, button: Button);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Presses every key of a key string, in order
    ///
    /// Nothing is pressed if any key is unknown.
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for button in Keypad::parse_keys(keys)? {
            self.press(button);
        }
        Ok(())
    }

    /// Presses all clear
    fn clear(&mut self) {
        self.press(Button::CLEAR);
    }
}

impl CalculatorDriver for Controller {
    fn press(&mut self, button: Button) {
        self.receive_input(button);
    }

    fn display(&self) -> String {
        Controller::display(self).to_string()
    }
}

/// One recorded button press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// Label of the pressed button
    pub key: String,
    /// Display text after the press
    pub display: String,
    /// Whether the controller accepted the press
    pub accepted: bool,
}

/// Driver that records every press and the resulting display
#[derive(Debug, Clone, Default)]
pub struct TranscriptDriver {
    controller: Controller,
    entries: Vec<TranscriptEntry>,
}

impl TranscriptDriver {
    /// Creates a recording driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording driver from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            controller: Controller::with_config(config),
            entries: Vec::new(),
        }
    }

    /// Returns the underlying controller
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Returns the recorded presses, oldest first
    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Renders the transcript as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl CalculatorDriver for TranscriptDriver {
    fn press(&mut self, button: Button) {
        let accepted = self.controller.receive_input(button);
        self.entries.push(TranscriptEntry {
            key: button.label(),
            display: self.controller.display().to_string(),
            accepted,
        });
    }

    fn display(&self) -> String {
        self.controller.display().to_string()
    }
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("3 + 4 =", "7"),
        ("10 - 4 =", "6"),
        ("6 * 7 =", "42"),
        ("20 / 4 =", "5"),
        ("1 / 4 =", "0.25"),
    ] {
        driver.clear();
        driver.press_keys(keys).unwrap();
        assert_eq!(driver.display(), expected, "keys: {keys}");
    }
    driver.clear();
}

/// Verifies left-to-right evaluation without precedence
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("2 + 3 *").unwrap();
    assert_eq!(driver.display(), "5");
    driver.press_keys("4 =").unwrap();
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies that successive equals repeat the last operation
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("5 - 3 =").unwrap();
    assert_eq!(driver.display(), "2");
    driver.press_keys("=").unwrap();
    assert_eq!(driver.display(), "-1");
    driver.press_keys("=").unwrap();
    assert_eq!(driver.display(), "-4");
    driver.clear();
}

/// Verifies sign toggle and percent
pub fn verify_unary_commands<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_keys("n").unwrap();
    assert_eq!(driver.display(), "0");

    driver.press_keys("8 n").unwrap();
    assert_eq!(driver.display(), "-8");
    driver.press_keys("n").unwrap();
    assert_eq!(driver.display(), "8");

    driver.press_keys("%").unwrap();
    assert_eq!(driver.display(), "0.08");
    driver.clear();
}

/// Verifies all clear from the middle of an operation
pub fn verify_all_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys("7 * 6 + 1").unwrap();
    driver.clear();
    assert_eq!(driver.display(), "0");
    driver.press_keys("2 =").unwrap();
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right(driver);
    verify_repeated_equals(driver);
    verify_unary_commands(driver);
    verify_all_clear(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, DivisionPolicy};

    #[test]
    fn test_controller_full_specification() {
        run_full_specification(&mut Controller::new());
    }

    #[test]
    fn test_transcript_full_specification() {
        run_full_specification(&mut TranscriptDriver::new());
    }

    #[test]
    fn test_press_keys_unknown_presses_nothing() {
        let mut driver = TranscriptDriver::new();
        assert_eq!(driver.press_keys("1 2 q"), Err(CalcError::UnknownKey('q')));
        assert!(driver.entries().is_empty());
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_transcript_records_presses() {
        let mut driver = TranscriptDriver::new();
        driver.press_keys("3+4=").unwrap();
        let displays: Vec<_> = driver.entries().iter().map(|e| e.display.as_str()).collect();
        assert_eq!(displays, vec!["3", "3", "4", "7"]);
        let keys: Vec<_> = driver.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["3", "+", "4", "="]);
        assert!(driver.entries().iter().all(|e| e.accepted));
    }

    #[test]
    fn test_transcript_marks_rejected_operator() {
        let mut driver = TranscriptDriver::new();
        driver.press_keys("2++").unwrap();
        let accepted: Vec<_> = driver.entries().iter().map(|e| e.accepted).collect();
        assert_eq!(accepted, vec![true, true, false]);
    }

    #[test]
    fn test_transcript_marks_rejected_entry() {
        let mut driver = TranscriptDriver::new();
        driver.press_keys("1..2").unwrap();
        let accepted: Vec<_> = driver.entries().iter().map(|e| e.accepted).collect();
        assert_eq!(accepted, vec![true, true, false, true]);
        assert_eq!(driver.display(), "1.2");

        driver.clear();
        driver.press_keys("00").unwrap();
        let accepted: Vec<_> = driver.entries()[5..].iter().map(|e| e.accepted).collect();
        assert_eq!(accepted, vec![true, false]);
    }

    #[test]
    fn test_transcript_with_config() {
        let config = CalculatorConfig::new().with_division_policy(DivisionPolicy::Ieee);
        let mut driver = TranscriptDriver::with_config(&config);
        driver.press_keys("6/0=").unwrap();
        assert_eq!(driver.display(), "inf");
        assert!(!driver.controller().is_error());
    }

    #[test]
    fn test_transcript_json() {
        let mut driver = TranscriptDriver::new();
        driver.press_keys("1").unwrap();
        let json = driver.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["key"], "1");
        assert_eq!(value[0]["display"], "1");
        assert_eq!(value[0]["accepted"], true);
    }
}
