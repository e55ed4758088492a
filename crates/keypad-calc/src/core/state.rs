//! Calculator state
//!
//! The pending operator and its first operand are stored together, so one can
//! never be present without the other.

use super::number::{format_number, parse_display};
use super::Operation;
use serde::{Deserialize, Serialize};

/// A binary operation waiting for its second operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Operator to apply
    pub operator: Operation,
    /// First operand; serialized as display text so `Infinity` and `NaN`
    /// survive JSON
    #[serde(with = "display_text")]
    pub previous_value: f64,
}

mod display_text {
    use super::format_number;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_number(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<f64>().map_err(de::Error::custom)
    }
}

impl PendingOperation {
    /// Creates a pending operation
    #[must_use]
    pub const fn new(operator: Operation, previous_value: f64) -> Self {
        Self {
            operator,
            previous_value,
        }
    }

    /// Resolves against the second operand
    #[must_use]
    pub fn resolve(self, operand: f64) -> f64 {
        self.operator.evaluate(self.previous_value, operand)
    }
}

/// Complete observable state of the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Display shown after reset
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates the reset state
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            pending: None,
            waiting_for_operand: false,
        }
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Display parsed as a number (`NaN` if unparseable)
    #[must_use]
    pub fn display_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Pending operation, if any
    #[must_use]
    pub const fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Pending operator, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operation> {
        self.pending.map(|p| p.operator)
    }

    /// First operand of the pending operation, if any
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.previous_value)
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub const fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// True if this is the reset form
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    /// Secondary display line: `"<previous> <operator> <display>"` while an
    /// operation is pending, empty otherwise
    #[must_use]
    pub fn indicator(&self) -> String {
        match self.pending {
            Some(p) => format!(
                "{} {} {}",
                format_number(p.previous_value),
                p.operator,
                self.display
            ),
            None => String::new(),
        }
    }

    /// Serializes the state as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
