//! Stateful calculator session
//!
//! Owns one [`CalculatorState`] and feeds it button presses. This is what a
//! UI event handler holds on to.

use crate::config::CalcConfig;
use crate::core::number::is_finite_display;
use crate::core::{CalcError, CalcResult, CalculatorState, Input, Operation};
use tracing::{debug, warn};

/// Calculator session: current state plus configuration
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: CalcConfig,
    presses: u64,
}

impl Calculator {
    /// Creates a calculator in the reset state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with custom configuration
    #[must_use]
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Pending operator, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operation> {
        self.state.operator()
    }

    /// Secondary display line while an operation is pending
    #[must_use]
    pub fn indicator(&self) -> String {
        self.state.indicator()
    }

    /// Number of presses committed since creation
    #[must_use]
    pub const fn presses(&self) -> u64 {
        self.presses
    }

    /// Applies one press.
    ///
    /// With [`NonFinitePolicy::Reject`] a press whose result is not finite is
    /// refused and the state is left unchanged.
    pub fn press(&mut self, input: Input) -> CalcResult<&CalculatorState> {
        let next = self.state.apply(input);

        if self.config.non_finite.is_reject() && !is_finite_display(next.display()) {
            warn!(input = input.symbol(), display = next.display(), "rejected non-finite result");
            return Err(CalcError::NonFiniteResult {
                display: next.display().to_string(),
            });
        }

        debug!(
            input = input.symbol(),
            display = next.display(),
            indicator = %next.indicator(),
            "press"
        );
        self.state = next;
        self.presses += 1;
        Ok(&self.state)
    }

    /// Parses and applies one button symbol
    pub fn press_symbol(&mut self, symbol: &str) -> CalcResult<&CalculatorState> {
        let input: Input = symbol.parse()?;
        self.press(input)
    }

    /// Parses and applies whitespace-separated symbols.
    ///
    /// The whole sequence is parsed before anything is applied; application
    /// stops at the first refused press.
    pub fn press_sequence(&mut self, keys: &str) -> CalcResult<&CalculatorState> {
        let inputs = Input::parse_sequence(keys)?;
        for input in inputs {
            self.press(input)?;
        }
        Ok(&self.state)
    }

    /// Returns to the reset state
    pub fn reset(&mut self) {
        debug!("reset");
        self.state = CalculatorState::new();
    }
}
