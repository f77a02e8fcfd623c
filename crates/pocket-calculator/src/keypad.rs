//! Keypad layout and keyboard mapping
//!
//! Visual feedback: front ends render the same grid and map the same keys,
//! so a key sequence means the same thing everywhere.

use crate::core::{Button, CalcError, CalcResult, Command, Digit, Operator};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The button this key presses
    pub button: Button,
    /// Stable element ID for front ends
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-column button definition
    #[must_use]
    pub fn new(button: Button, row: usize, col: usize) -> Self {
        Self::wide(button, row, col, 1)
    }

    /// Creates a button definition covering `span` columns
    #[must_use]
    pub fn wide(button: Button, row: usize, col: usize, span: usize) -> Self {
        Self {
            button,
            id: element_id(button),
            row,
            col,
            span,
        }
    }

    /// Returns true if the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

fn element_id(button: Button) -> String {
    match button {
        Button::Digit(d) => format!("btn-{}", d.value()),
        Button::Decimal => "btn-decimal".to_string(),
        Button::Command(Command::Operator(op)) => format!("btn-{}", op.name()),
        Button::Command(Command::Equals) => "btn-equals".to_string(),
        Button::Command(Command::Clear) => "btn-clear".to_string(),
        Button::Command(Command::ToggleSign) => "btn-sign".to_string(),
        Button::Command(Command::Percent) => "btn-percent".to_string(),
    }
}

/// Pocket calculator keypad layout
/// ```text
/// [ AC ] [ ± ] [ % ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ − ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [     0    ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = vec![
            KeypadButton::new(Button::CLEAR, 0, 0),
            KeypadButton::new(Button::TOGGLE_SIGN, 0, 1),
            KeypadButton::new(Button::PERCENT, 0, 2),
        ];

        for (row, op) in Operator::ALL.into_iter().enumerate() {
            if row > 0 {
                // Digits 7-9, 4-6, 1-3 fill rows 1-3 left of the operator.
                let first = 10 - 3 * row as u8;
                for col in 0..3 {
                    if let Some(button) = Button::digit(first + col as u8) {
                        buttons.push(KeypadButton::new(button, row, col));
                    }
                }
            }
            buttons.push(KeypadButton::new(Button::operator(op), row, 3));
        }

        if let Some(zero) = Button::digit(0) {
            buttons.push(KeypadButton::wide(zero, 4, 0, 2));
        }
        buttons.push(KeypadButton::new(Button::Decimal, 4, 2));
        buttons.push(KeypadButton::new(Button::EQUALS, 4, 3));

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Processes a click on an element and returns the pressed button
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Button> {
        self.find_button_by_id(element_id).map(|b| b.button)
    }

    /// Maps a keyboard character to a button
    #[must_use]
    pub fn key_to_button(key: char) -> Option<Button> {
        if let Some(digit) = Digit::from_char(key) {
            return Some(Button::Digit(digit));
        }
        let button = match key {
            '.' | ',' => Button::Decimal,
            '+' => Button::operator(Operator::Add),
            '-' | '−' => Button::operator(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Button::operator(Operator::Multiply),
            '/' | '÷' => Button::operator(Operator::Divide),
            '=' => Button::EQUALS,
            'c' | 'C' => Button::CLEAR,
            'n' | 'N' | '±' => Button::TOGGLE_SIGN,
            '%' => Button::PERCENT,
            _ => return None,
        };
        Some(button)
    }

    /// Parses a string of key characters into buttons, skipping whitespace
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownKey`] for the first unmapped character.
    pub fn parse_keys(keys: &str) -> CalcResult<Vec<Button>> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Self::key_to_button(c).ok_or(CalcError::UnknownKey(c)))
            .collect()
    }

    /// Renders the layout as a text grid
    #[must_use]
    pub fn render(&self) -> String {
        const CELL: usize = 6;
        let mut out = String::new();
        for row in 0..self.rows {
            let mut line = String::new();
            for b in self.buttons.iter().filter(|b| b.row == row) {
                let width = CELL * b.span + b.span.saturating_sub(1);
                line.push_str(&format!("[{:^w$}]", b.button.label(), w = width - 2));
                line.push(' ');
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keypad_has_every_button() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));

        let buttons: HashSet<Button> = keypad.buttons().iter().map(|b| b.button).collect();
        for d in 0..=9 {
            assert!(buttons.contains(&Button::digit(d).unwrap()));
        }
        for op in Operator::ALL {
            assert!(buttons.contains(&Button::operator(op)));
        }
        for b in [
            Button::Decimal,
            Button::EQUALS,
            Button::CLEAR,
            Button::TOGGLE_SIGN,
            Button::PERCENT,
        ] {
            assert!(buttons.contains(&b));
        }
    }

    #[test]
    fn test_keypad_layout_positions() {
        let keypad = Keypad::new();
        let at = |r, c| keypad.get_button_at(r, c).unwrap().button;
        assert_eq!(at(0, 0), Button::CLEAR);
        assert_eq!(at(0, 3), Button::operator(Operator::Divide));
        assert_eq!(at(1, 0), Button::digit(7).unwrap());
        assert_eq!(at(2, 2), Button::digit(6).unwrap());
        assert_eq!(at(3, 0), Button::digit(1).unwrap());
        assert_eq!(at(3, 3), Button::operator(Operator::Add));
        assert_eq!(at(4, 0), Button::digit(0).unwrap());
        assert_eq!(at(4, 1), Button::digit(0).unwrap());
        assert_eq!(at(4, 2), Button::Decimal);
        assert_eq!(at(4, 3), Button::EQUALS);
    }

    #[test]
    fn test_get_button_out_of_range() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-7"), Button::digit(7));
        assert_eq!(
            keypad.handle_click("btn-times"),
            Some(Button::operator(Operator::Multiply))
        );
        assert_eq!(keypad.handle_click("btn-sign"), Some(Button::TOGGLE_SIGN));
        assert_eq!(keypad.handle_click("btn-unknown"), None);
    }

    #[test]
    fn test_key_to_button() {
        for (ch, value) in ('0'..='9').zip(0..) {
            assert_eq!(Keypad::key_to_button(ch), Button::digit(value));
        }
        assert_eq!(Keypad::key_to_button('.'), Some(Button::Decimal));
        assert_eq!(
            Keypad::key_to_button('x'),
            Some(Button::operator(Operator::Multiply))
        );
        assert_eq!(
            Keypad::key_to_button('÷'),
            Some(Button::operator(Operator::Divide))
        );
        assert_eq!(Keypad::key_to_button('C'), Some(Button::CLEAR));
        assert_eq!(Keypad::key_to_button('n'), Some(Button::TOGGLE_SIGN));
        assert_eq!(Keypad::key_to_button('%'), Some(Button::PERCENT));
        assert_eq!(Keypad::key_to_button('('), None);
    }

    #[test]
    fn test_parse_keys_skips_whitespace() {
        let buttons = Keypad::parse_keys("3 + 4 =").unwrap();
        assert_eq!(
            buttons,
            vec![
                Button::digit(3).unwrap(),
                Button::operator(Operator::Add),
                Button::digit(4).unwrap(),
                Button::EQUALS,
            ]
        );
    }

    #[test]
    fn test_parse_keys_unknown() {
        assert_eq!(Keypad::parse_keys("1 ^ 2"), Err(CalcError::UnknownKey('^')));
    }

    #[test]
    fn test_render() {
        let rendered = Keypad::new().render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("AC"));
        assert!(lines[1].starts_with("[ 7  ]"));
        assert!(lines[4].contains('='));
    }

    #[test]
    fn test_every_button_is_reachable_by_key() {
        let keypad = Keypad::new();
        let keys = "0123456789.+-*/=cn%";
        let mapped: HashSet<Button> = Keypad::parse_keys(keys).unwrap().into_iter().collect();
        for b in keypad.buttons() {
            assert!(mapped.contains(&b.button), "no key for {}", b.button);
        }
    }
}
