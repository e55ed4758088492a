//! Button-press transitions
//!
//! [`apply`] is the whole engine: one state and one input in, the next state
//! out. Evaluation is strictly left to right; there is no precedence.

use super::number::{format_number, parse_display};
use super::{CalculatorState, Digit, Input, Operation, PendingOperation};
use tracing::trace;

/// Computes the state that follows `input`.
///
/// Never fails: every [`Input`] has a defined transition from every state.
#[must_use]
pub fn apply(state: &CalculatorState, input: Input) -> CalculatorState {
    let next = match input {
        Input::Clear => CalculatorState::new(),
        Input::SignToggle => toggle_sign(state),
        Input::Percent => percent(state),
        Input::Decimal => decimal_point(state),
        Input::Operator(op) => operator(state, op),
        Input::Equals => equals(state),
        Input::Digit(d) => digit(state, d),
    };
    trace!(
        input = input.symbol(),
        display = %next.display,
        operator = ?next.operator(),
        waiting = next.waiting_for_operand,
        "applied input"
    );
    next
}

impl CalculatorState {
    /// Returns the state after `input`
    #[must_use]
    pub fn apply(&self, input: Input) -> Self {
        apply(self, input)
    }

    /// Returns the state after every input in order
    #[must_use]
    pub fn apply_all<I>(&self, inputs: I) -> Self
    where
        I: IntoIterator<Item = Input>,
    {
        inputs
            .into_iter()
            .fold(self.clone(), |state, input| apply(&state, input))
    }
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    let display = match state.display.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", state.display),
    };
    CalculatorState {
        display,
        ..state.clone()
    }
}

fn percent(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        display: format_number(parse_display(&state.display) / 100.0),
        waiting_for_operand: true,
        ..state.clone()
    }
}

fn decimal_point(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_operand {
        CalculatorState {
            display: "0.".to_string(),
            waiting_for_operand: false,
            ..state.clone()
        }
    } else if state.display.contains('.') {
        state.clone()
    } else {
        CalculatorState {
            display: format!("{}.", state.display),
            ..state.clone()
        }
    }
}

fn operator(state: &CalculatorState, next: Operation) -> CalculatorState {
    let operand = parse_display(&state.display);
    let (previous_value, display) = match state.pending {
        None => (operand, state.display.clone()),
        Some(pending) => {
            let result = pending.resolve(operand);
            (result, format_number(result))
        }
    };
    CalculatorState {
        display,
        pending: Some(PendingOperation::new(next, previous_value)),
        waiting_for_operand: true,
    }
}

fn equals(state: &CalculatorState) -> CalculatorState {
    match state.pending {
        Some(pending) => CalculatorState {
            display: format_number(pending.resolve(parse_display(&state.display))),
            pending: None,
            waiting_for_operand: true,
        },
        None => state.clone(),
    }
}

fn digit(state: &CalculatorState, d: Digit) -> CalculatorState {
    let display = if state.waiting_for_operand || state.display == CalculatorState::INITIAL_DISPLAY
    {
        d.symbol().to_string()
    } else {
        format!("{}{}", state.display, d.symbol())
    };
    CalculatorState {
        display,
        waiting_for_operand: false,
        ..state.clone()
    }
}
