//! Keypad layout
//!
//! Static table mapping each on-screen button to the input it emits.
//! Layout:
//! ```text
//! [ AC ] [ ± ] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [ ⟳  ] [ 0 ] [ . ] [ = ]
//! ```

use crate::core::{Input, Operation};

/// Visual category of a button; consumers derive colors from this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits, the decimal point and reload
    Digit,
    /// Binary operators
    Operator,
    /// `AC`, `±`, `%` and `=`
    Function,
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The input this button emits
    pub input: Input,
    /// Text on the button
    pub label: &'static str,
    /// Stable element ID
    pub id: String,
    /// Visual category
    pub kind: ButtonKind,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// Label of the reload button, which emits a reset
pub const RELOAD_LABEL: &str = "⟳";

impl KeypadButton {
    /// Creates a button labelled with its input symbol
    #[must_use]
    pub fn new(input: Input, row: usize, col: usize) -> Self {
        let kind = match input {
            Input::Digit(_) | Input::Decimal => ButtonKind::Digit,
            Input::Operator(_) => ButtonKind::Operator,
            Input::Equals | Input::SignToggle | Input::Percent | Input::Clear => {
                ButtonKind::Function
            }
        };
        Self {
            input,
            label: input.symbol(),
            id: element_id(input),
            kind,
            row,
            col,
        }
    }

    /// Creates the reload button: emits `AC` but sits with the digits
    #[must_use]
    pub fn reload(row: usize, col: usize) -> Self {
        Self {
            input: Input::Clear,
            label: RELOAD_LABEL,
            id: "btn-reload".to_string(),
            kind: ButtonKind::Digit,
            row,
            col,
        }
    }
}

fn element_id(input: Input) -> String {
    match input {
        Input::Digit(d) => format!("btn-{}", d.value()),
        Input::Decimal => "btn-decimal".to_string(),
        Input::Operator(op) => format!("btn-{}", op.name()),
        Input::Equals => "btn-equals".to_string(),
        Input::SignToggle => "btn-sign".to_string(),
        Input::Percent => "btn-percent".to_string(),
        Input::Clear => "btn-clear".to_string(),
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
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
    /// Creates the standard 5x4 keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |value: u8, row, col| {
            let input = Input::digit(value).unwrap_or(Input::Decimal);
            KeypadButton::new(input, row, col)
        };
        let op = |op: Operation, row, col| KeypadButton::new(Input::Operator(op), row, col);

        let buttons = vec![
            // Row 0: AC ± % ÷
            KeypadButton::new(Input::Clear, 0, 0),
            KeypadButton::new(Input::SignToggle, 0, 1),
            KeypadButton::new(Input::Percent, 0, 2),
            op(Operation::Divide, 0, 3),
            // Row 1: 7 8 9 ×
            digit(7, 1, 0),
            digit(8, 1, 1),
            digit(9, 1, 2),
            op(Operation::Multiply, 1, 3),
            // Row 2: 4 5 6 -
            digit(4, 2, 0),
            digit(5, 2, 1),
            digit(6, 2, 2),
            op(Operation::Subtract, 2, 3),
            // Row 3: 1 2 3 +
            digit(1, 3, 0),
            digit(2, 3, 1),
            digit(3, 3, 2),
            op(Operation::Add, 3, 3),
            // Row 4: ⟳ 0 . =
            KeypadButton::reload(4, 0),
            digit(0, 4, 1),
            KeypadButton::new(Input::Decimal, 4, 2),
            KeypadButton::new(Input::Equals, 4, 3),
        ];

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

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Finds the first button emitting `input` (`AC` wins over reload)
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Input emitted by clicking the button at a grid position
    #[must_use]
    pub fn click(&self, row: usize, col: usize) -> Option<Input> {
        self.get_button_at(row, col).map(|b| b.input)
    }

    /// Renders the keypad as a text grid
    #[must_use]
    pub fn render_grid(&self) -> String {
        self.buttons
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|b| format!("[{:^4}]", b.label))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
