//! Keypad Calculator
//!
//! The input state machine behind an on-screen calculator. Button presses
//! go in, a display string and a pending-operator indicator come out.
//!
//! - Operands are entered digit by digit; leading zeros collapse.
//! - Operators evaluate strictly left to right: `2 + 3 × 4 =` shows `20`.
//! - `±`, `%`, `.` and `AC` behave like a pocket calculator.
//! - Division by zero shows `Infinity` or `NaN` unless configured to refuse.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! // Pure transitions
//! let state = CalculatorState::new()
//!     .apply_all(Input::parse_sequence("2 + 3 × 4 =").unwrap());
//! assert_eq!(state.display(), "20");
//!
//! // Stateful session
//! let mut calc = Calculator::new();
//! calc.press_sequence("2 0 0 %").unwrap();
//! assert_eq!(calc.display(), "2");
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

pub mod calculator;
pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod playbook;

pub use calculator::Calculator;
pub use config::{CalcConfig, NonFinitePolicy};
pub use crate::core::{apply, CalcError, CalcResult, CalculatorState, Input, Operation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::config::{CalcConfig, NonFinitePolicy};
    pub use crate::core::number::{format_number, parse_display};
    pub use crate::core::{
        apply, CalcError, CalcResult, CalculatorState, Digit, Input, Operation, PendingOperation,
    };
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
    pub use crate::playbook::{Playbook, PlaybookRunResult, PlaybookRunner, StepResult};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn run(keys: &str) -> String {
        let mut calc = Calculator::new();
        calc.press_sequence(keys).unwrap();
        calc.display().to_string()
    }

    #[test]
    fn test_prelude_imports() {
        let state = apply(&CalculatorState::new(), Input::digit(3).unwrap());
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn test_sequential_evaluation() {
        assert_eq!(run("2 + 3 × 4 ="), "20");
    }

    #[test]
    fn test_decimal_point_rejection() {
        assert_eq!(run("1 . 2 ."), "1.2");
    }

    #[test]
    fn test_leading_zero_suppression() {
        assert_eq!(run("0 0 5"), "5");
    }

    #[test]
    fn test_percent() {
        assert_eq!(run("2 0 0 %"), "2");
    }

    #[test]
    fn test_operator_chaining() {
        assert_eq!(run("5 - 2 - 1 ="), "2");
    }

    #[test]
    fn test_equals_without_operator() {
        assert_eq!(run("7 ="), "7");
    }

    #[test]
    fn test_waiting_for_operand_replaces() {
        let mut calc = Calculator::new();
        calc.press_sequence("5 +").unwrap();
        assert!(calc.state().waiting_for_operand());
        calc.press_symbol("3").unwrap();
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_keypad_and_session_agree() {
        let keys = "1 2 . 5 × 4 ± - 1 0 % =";
        let mut keypad = KeypadDriver::new();
        keypad.press_all(keys).unwrap();
        assert_eq!(keypad.display(), run(keys));
    }
}
