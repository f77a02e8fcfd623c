//! Calculator buttons
//!
//! Error prevention: a [`Button`] splits into entry buttons, handled by the
//! display controller, and [`Command`]s, the only input the engine accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Operator;

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, returning `None` outside 0-9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit as a character
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Committing actions, forwarded to the arithmetic engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// One of the four binary operators
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// All clear
    Clear,
    /// Negate the displayed number
    ToggleSign,
    /// Divide the displayed number by 100
    Percent,
}

/// Every button on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    /// Digit entry
    Digit(Digit),
    /// Decimal point entry
    Decimal,
    /// A committing action
    Command(Command),
}

impl Button {
    /// The all-clear button
    pub const CLEAR: Self = Self::Command(Command::Clear);
    /// The equals button
    pub const EQUALS: Self = Self::Command(Command::Equals);
    /// The sign toggle button
    pub const TOGGLE_SIGN: Self = Self::Command(Command::ToggleSign);
    /// The percent button
    pub const PERCENT: Self = Self::Command(Command::Percent);

    /// Creates a digit button, returning `None` outside 0-9
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// Creates an operator button
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        Self::Command(Command::Operator(op))
    }

    /// Returns the command if this button commits the display
    #[must_use]
    pub const fn command(self) -> Option<Command> {
        match self {
            Self::Command(cmd) => Some(cmd),
            Self::Digit(_) | Self::Decimal => None,
        }
    }

    /// Returns the operator if this is one of the four operator buttons
    #[must_use]
    pub const fn as_operator(self) -> Option<Operator> {
        match self {
            Self::Command(Command::Operator(op)) => Some(op),
            _ => None,
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_char().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Command(Command::Operator(op)) => op.symbol().to_string(),
            Self::Command(Command::Equals) => "=".to_string(),
            Self::Command(Command::Clear) => "AC".to_string(),
            Self::Command(Command::ToggleSign) => "±".to_string(),
            Self::Command(Command::Percent) => "%".to_string(),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        for d in 0..=9 {
            assert_eq!(Digit::new(d).map(Digit::value), Some(d));
        }
        assert!(Digit::new(10).is_none());
        assert!(Digit::new(u8::MAX).is_none());
    }

    #[test]
    fn test_digit_char_conversion() {
        for ch in '0'..='9' {
            let digit = Digit::from_char(ch).unwrap();
            assert_eq!(digit.to_char(), ch);
        }
        assert!(Digit::from_char('a').is_none());
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Digit>("7").is_ok());
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn test_button_command_partition() {
        assert_eq!(Button::digit(3).unwrap().command(), None);
        assert_eq!(Button::Decimal.command(), None);
        assert_eq!(Button::EQUALS.command(), Some(Command::Equals));
        assert_eq!(
            Button::operator(Operator::Add).command(),
            Some(Command::Operator(Operator::Add))
        );
    }

    #[test]
    fn test_button_as_operator() {
        assert_eq!(
            Button::operator(Operator::Divide).as_operator(),
            Some(Operator::Divide)
        );
        assert_eq!(Button::PERCENT.as_operator(), None);
        assert_eq!(Button::Decimal.as_operator(), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(Button::digit(0).unwrap().label(), "0");
        assert_eq!(Button::Decimal.label(), ".");
        assert_eq!(Button::operator(Operator::Multiply).label(), "×");
        assert_eq!(Button::EQUALS.label(), "=");
        assert_eq!(Button::CLEAR.label(), "AC");
        assert_eq!(Button::TOGGLE_SIGN.label(), "±");
        assert_eq!(Button::PERCENT.to_string(), "%");
    }
}
