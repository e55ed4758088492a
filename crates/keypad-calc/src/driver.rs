//! Calculator drivers
//!
//! A driver is anything that can press buttons and read the display. Test
//! scenarios and playbooks are written once against [`CalculatorDriver`]
//! and run through either the bare session or the keypad.

use crate::calculator::Calculator;
use crate::core::{CalcError, CalcResult, CalculatorState, Input};
use crate::keypad::Keypad;

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button for one symbol
    fn press(&mut self, symbol: &str) -> CalcResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the secondary line (`"<previous> <op> <display>"` or empty)
    fn indicator(&self) -> String;

    /// Gets the full state
    fn state(&self) -> CalculatorState;

    /// Resets to the initial state
    fn clear(&mut self);

    /// Presses whitespace-separated symbols in order
    fn press_all(&mut self, keys: &str) -> CalcResult<()> {
        for symbol in keys.split_whitespace() {
            self.press(symbol)?;
        }
        Ok(())
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, symbol: &str) -> CalcResult<()> {
        self.press_symbol(symbol).map(|_| ())
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn indicator(&self) -> String {
        Self::indicator(self)
    }

    fn state(&self) -> CalculatorState {
        Self::state(self).clone()
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn press_all(&mut self, keys: &str) -> CalcResult<()> {
        self.press_sequence(keys).map(|_| ())
    }
}

/// Driver that clicks keypad buttons by label, like a user would
#[derive(Debug, Clone, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    calculator: Calculator,
    clicks: Vec<String>,
}

impl KeypadDriver {
    /// Creates a keypad driver over a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a keypad driver over an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            ..Self::default()
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Element IDs of every button clicked, oldest first
    #[must_use]
    pub fn clicks(&self) -> &[String] {
        &self.clicks
    }

    /// Clicks the button at a grid position
    pub fn click_at(&mut self, row: usize, col: usize) -> CalcResult<()> {
        let button = self
            .keypad
            .get_button_at(row, col)
            .ok_or_else(|| CalcError::invalid_input(format!("({row}, {col})")))?;
        let (id, input) = (button.id.clone(), button.input);
        self.calculator.press(input)?;
        self.clicks.push(id);
        Ok(())
    }
}

impl KeypadDriver {
    /// Grid positions to click for one token.
    ///
    /// Labels win (so `⟳` stays the reload button); anything else goes
    /// through the input parser, which expands `12` into two digit clicks.
    fn positions_for(&self, token: &str) -> CalcResult<Vec<(usize, usize)>> {
        if let Some(button) = self.keypad.find_button_by_label(token) {
            return Ok(vec![(button.row, button.col)]);
        }
        Input::parse_sequence(token)?
            .into_iter()
            .map(|input| {
                self.keypad
                    .find_button_by_input(input)
                    .map(|b| (b.row, b.col))
                    .ok_or_else(|| CalcError::invalid_input(token))
            })
            .collect()
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, symbol: &str) -> CalcResult<()> {
        for (row, col) in self.positions_for(symbol)? {
            self.click_at(row, col)?;
        }
        Ok(())
    }

    /// Resolves every token before clicking, so a bad symbol clicks nothing
    fn press_all(&mut self, keys: &str) -> CalcResult<()> {
        let mut positions = Vec::new();
        for token in keys.split_whitespace() {
            positions.extend(self.positions_for(token)?);
        }
        for (row, col) in positions {
            self.click_at(row, col)?;
        }
        Ok(())
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn indicator(&self) -> String {
        self.calculator.indicator()
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }

    fn clear(&mut self) {
        self.calculator.reset();
        self.clicks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_driver() {
        let mut driver = Calculator::new();
        driver.press_all("4 × 2 . 5 =").unwrap();
        assert_eq!(CalculatorDriver::display(&driver), "10");
        driver.clear();
        assert!(CalculatorDriver::state(&driver).is_initial());
    }

    #[test]
    fn test_keypad_driver_records_clicks() {
        let mut driver = KeypadDriver::new();
        driver.press_all("7 + 1 =").unwrap();
        assert_eq!(driver.display(), "8");
        assert_eq!(
            driver.clicks(),
            ["btn-7", "btn-add", "btn-1", "btn-equals"]
        );
    }

    #[test]
    fn test_keypad_driver_reload_label() {
        let mut driver = KeypadDriver::new();
        driver.press_all("5 ⟳").unwrap();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.clicks().last().map(String::as_str), Some("btn-reload"));
    }

    #[test]
    fn test_keypad_driver_ascii_spelling() {
        let mut driver = KeypadDriver::new();
        driver.press_all("6 * 7 =").unwrap();
        assert_eq!(driver.display(), "42");
        assert_eq!(driver.clicks()[1], "btn-multiply");
    }

    #[test]
    fn test_keypad_driver_unknown_symbol() {
        let mut driver = KeypadDriver::new();
        assert!(driver.press("^").is_err());
        assert!(driver.clicks().is_empty());
    }

    #[test]
    fn test_keypad_driver_expands_numbers() {
        let mut driver = KeypadDriver::new();
        driver.press_all("12 + 3 =").unwrap();
        assert_eq!(driver.display(), "15");
        assert_eq!(
            driver.clicks(),
            ["btn-1", "btn-2", "btn-add", "btn-3", "btn-equals"]
        );
    }

    #[test]
    fn test_keypad_driver_bad_token_clicks_nothing() {
        let mut driver = KeypadDriver::new();
        assert!(driver.press_all("1 2 sqrt").is_err());
        assert!(driver.clicks().is_empty());
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_click_at_out_of_grid() {
        let mut driver = KeypadDriver::new();
        let err = driver.click_at(9, 9).unwrap_err();
        assert!(err.to_string().contains("(9, 9)"));
    }

    #[test]
    fn test_indicator_through_keypad() {
        let mut driver = KeypadDriver::new();
        driver.press_all("9 ÷ 3").unwrap();
        assert_eq!(driver.indicator(), "9 ÷ 3");
    }
}
