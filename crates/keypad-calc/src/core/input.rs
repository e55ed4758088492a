//! Typed button inputs
//!
//! Button symbols are parsed once at the boundary; the engine only ever sees
//! [`Input`], so an unknown symbol cannot reach a transition.

use super::{CalcError, CalcResult, Operation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DIGIT_SYMBOLS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A decimal digit `0`-`9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, returning `None` above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Converts a character `'0'..='9'`
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Single-character symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        DIGIT_SYMBOLS[self.0 as usize]
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value).ok_or_else(|| CalcError::invalid_input(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// One button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Digit `0`-`9`
    Digit(Digit),
    /// Decimal point `.`
    Decimal,
    /// Binary operator `+ - × ÷`
    Operator(Operation),
    /// Equals `=`
    Equals,
    /// Sign toggle `±`
    SignToggle,
    /// Percent `%`
    Percent,
    /// All-clear `AC`
    Clear,
}

impl Input {
    /// Digit input from a numeric value, `None` above 9
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// Canonical button symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Digit(d) => d.symbol(),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::SignToggle => "±",
            Self::Percent => "%",
            Self::Clear => "AC",
        }
    }

    /// Parses whitespace-separated symbols.
    ///
    /// A token made only of digits and points, like `12.5`, expands into one
    /// press per character.
    pub fn parse_sequence(text: &str) -> CalcResult<Vec<Self>> {
        let mut inputs = Vec::new();
        for token in text.split_whitespace() {
            if let Ok(input) = token.parse::<Self>() {
                inputs.push(input);
                continue;
            }
            if !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                return Err(CalcError::invalid_input(token));
            }
            for ch in token.chars() {
                let input = match Digit::from_char(ch) {
                    Some(d) => Self::Digit(d),
                    None => Self::Decimal,
                };
                inputs.push(input);
            }
        }
        Ok(inputs)
    }
}

impl FromStr for Input {
    type Err = CalcError;

    /// Parses a button symbol.
    ///
    /// Besides the keypad symbols this accepts `*`, `x`, `/`, `+/-`, `C` and
    /// `reload` as plain-text spellings.
    fn from_str(s: &str) -> CalcResult<Self> {
        if let Some(op) = Operation::from_symbol(s) {
            return Ok(Self::Operator(op));
        }
        let input = match s {
            "." => Self::Decimal,
            "=" => Self::Equals,
            "±" | "+/-" => Self::SignToggle,
            "%" => Self::Percent,
            "AC" | "C" | "reload" => Self::Clear,
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(d), None) => Self::Digit(d),
                    _ => return Err(CalcError::invalid_input(s)),
                }
            }
        };
        Ok(input)
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
