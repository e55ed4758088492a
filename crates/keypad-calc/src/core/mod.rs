//! Core calculator engine
//!
//! Everything in here is free of I/O: inputs are typed, transitions are pure,
//! and numbers are plain `f64`.

pub mod engine;
pub mod input;
pub mod number;
mod operations;
pub mod state;

pub use engine::apply;
pub use input::{Digit, Input};
pub use operations::Operation;
pub use state::{CalculatorState, PendingOperation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Error)]
pub enum CalcError {
    /// A symbol that no calculator button emits
    #[error("Invalid input symbol: {symbol:?}")]
    InvalidInput {
        /// The rejected symbol
        symbol: String,
    },

    /// A transition would have shown a non-finite value
    #[error("Non-finite result: {display}")]
    NonFiniteResult {
        /// The display the transition would have produced
        display: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Playbook could not be read or parsed
    #[error("Playbook error: {message}")]
    Playbook {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(symbol: impl Into<String>) -> Self {
        Self::InvalidInput {
            symbol: symbol.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a playbook error
    #[must_use]
    pub fn playbook(message: impl Into<String>) -> Self {
        Self::Playbook {
            message: message.into(),
        }
    }
}
