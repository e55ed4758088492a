//! Key-press playbooks
//!
//! A playbook is a YAML script of button presses with the observable state
//! expected after each step:
//!
//! ```yaml
//! name: left-to-right
//! steps:
//!   - name: chain
//!     press: "2 + 3 ×"
//!     expect_display: "5"
//!     expect_operator: multiply
//!   - name: finish
//!     press: "4 ="
//!     expect_display: "20"
//! ```

use crate::core::{CalcError, CalcResult, CalculatorState, Operation};
use crate::driver::CalculatorDriver;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Root playbook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Playbook {
    /// Playbook name
    #[serde(default)]
    pub name: String,
    /// Playbook description
    #[serde(default)]
    pub description: String,
    /// Steps run in order
    pub steps: Vec<PlaybookStep>,
}

/// One step: some presses, then checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybookStep {
    /// Step name
    #[serde(default)]
    pub name: String,
    /// Whitespace-separated button symbols
    pub press: String,
    /// Expected display text
    #[serde(default)]
    pub expect_display: Option<String>,
    /// Expected pending operator; `none` asserts that nothing is pending
    #[serde(default)]
    pub expect_operator: Option<ExpectedOperator>,
    /// Expected first operand of the pending operation
    #[serde(default)]
    pub expect_previous: Option<f64>,
}

/// Operator expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedOperator {
    /// No operation pending
    None,
    /// Addition pending
    Add,
    /// Subtraction pending
    Subtract,
    /// Multiplication pending
    Multiply,
    /// Division pending
    Divide,
}

impl ExpectedOperator {
    fn as_operation(self) -> Option<Operation> {
        match self {
            Self::None => None,
            Self::Add => Some(Operation::Add),
            Self::Subtract => Some(Operation::Subtract),
            Self::Multiply => Some(Operation::Multiply),
            Self::Divide => Some(Operation::Divide),
        }
    }
}

impl Playbook {
    /// Parses a playbook from YAML
    pub fn from_yaml_str(yaml: &str) -> CalcResult<Self> {
        let playbook: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| CalcError::playbook(e.to_string()))?;
        if playbook.steps.is_empty() {
            return Err(CalcError::playbook("playbook has no steps"));
        }
        Ok(playbook)
    }

    /// Loads a playbook file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// Result of executing a single step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Step name
    pub name: String,
    /// Whether step passed
    pub passed: bool,
    /// Display after the step
    pub display: String,
    /// Step execution time
    pub duration: Duration,
    /// Failure messages
    pub failures: Vec<String>,
}

/// Result of running a playbook
#[derive(Debug, Clone)]
pub struct PlaybookRunResult {
    /// Playbook name
    pub name: String,
    /// Whether every step passed
    pub passed: bool,
    /// Individual step results, up to and including the first failure
    pub step_results: Vec<StepResult>,
    /// State after the last executed step
    pub final_state: CalculatorState,
    /// Total execution time
    pub total_time: Duration,
}

impl PlaybookRunResult {
    /// Number of passed steps
    #[must_use]
    pub fn passed_steps(&self) -> usize {
        self.step_results.iter().filter(|s| s.passed).count()
    }

    /// Renders a plain-text report
    #[must_use]
    pub fn render_report(&self) -> String {
        let mut out = format!("Playbook: {}\n", self.name);
        for step in &self.step_results {
            let mark = if step.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("  [{mark}] {} => {}\n", step.name, step.display));
            for failure in &step.failures {
                out.push_str(&format!("         {failure}\n"));
            }
        }
        out.push_str(&format!(
            "{}/{} steps passed",
            self.passed_steps(),
            self.step_results.len()
        ));
        out
    }
}

/// Runs playbooks against any driver
#[derive(Debug)]
pub struct PlaybookRunner<D: CalculatorDriver> {
    driver: D,
}

impl<D: CalculatorDriver> PlaybookRunner<D> {
    /// Creates a runner over a driver
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Returns the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consumes the runner and returns the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Resets the driver, then runs every step until the first failure
    pub fn run(&mut self, playbook: &Playbook) -> PlaybookRunResult {
        let start = Instant::now();
        self.driver.clear();

        let mut step_results = Vec::new();
        for (index, step) in playbook.steps.iter().enumerate() {
            let result = self.run_step(index, step);
            let failed = !result.passed;
            step_results.push(result);
            if failed {
                break;
            }
        }

        let passed = step_results.iter().all(|s| s.passed);
        info!(
            playbook = %playbook.name,
            passed,
            steps = step_results.len(),
            "playbook finished"
        );
        PlaybookRunResult {
            name: playbook.name.clone(),
            passed,
            step_results,
            final_state: self.driver.state(),
            total_time: start.elapsed(),
        }
    }

    fn run_step(&mut self, index: usize, step: &PlaybookStep) -> StepResult {
        let start = Instant::now();
        let name = if step.name.is_empty() {
            format!("step {}", index + 1)
        } else {
            step.name.clone()
        };

        let mut failures = Vec::new();
        if let Err(e) = self.driver.press_all(&step.press) {
            failures.push(e.to_string());
        }

        let state = self.driver.state();
        if failures.is_empty() {
            failures.extend(check_expectations(step, &state));
        }

        StepResult {
            name,
            passed: failures.is_empty(),
            display: state.display().to_string(),
            duration: start.elapsed(),
            failures,
        }
    }
}

fn check_expectations(step: &PlaybookStep, state: &CalculatorState) -> Vec<String> {
    let mut failures = Vec::new();

    if let Some(expected) = &step.expect_display {
        if state.display() != expected {
            failures.push(format!(
                "display: expected {expected:?}, got {:?}",
                state.display()
            ));
        }
    }

    if let Some(expected) = step.expect_operator {
        let expected = expected.as_operation();
        if state.operator() != expected {
            failures.push(format!(
                "operator: expected {}, got {}",
                describe_operator(expected),
                describe_operator(state.operator())
            ));
        }
    }

    if let Some(expected) = step.expect_previous {
        if state.previous_value() != Some(expected) {
            failures.push(format!(
                "previous value: expected {expected}, got {:?}",
                state.previous_value()
            ));
        }
    }

    failures
}

fn describe_operator(op: Option<Operation>) -> &'static str {
    op.map_or("none", Operation::symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::driver::KeypadDriver;

    const LEFT_TO_RIGHT: &str = r#"
name: left-to-right
description: no precedence
steps:
  - name: chain
    press: "2 + 3 ×"
    expect_display: "5"
    expect_operator: multiply
    expect_previous: 5
  - name: finish
    press: "4 ="
    expect_display: "20"
    expect_operator: none
"#;

    #[test]
    fn test_parse_playbook() {
        let playbook = Playbook::from_yaml_str(LEFT_TO_RIGHT).unwrap();
        assert_eq!(playbook.name, "left-to-right");
        assert_eq!(playbook.steps.len(), 2);
        assert_eq!(
            playbook.steps[0].expect_operator,
            Some(ExpectedOperator::Multiply)
        );
        assert_eq!(playbook.steps[0].expect_previous, Some(5.0));
    }

    #[test]
    fn test_empty_playbook_rejected() {
        let err = Playbook::from_yaml_str("name: empty\nsteps: []\n").unwrap_err();
        assert!(err.to_string().contains("no steps"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "steps:\n  - press: \"1\"\n    expect_colour: red\n";
        assert!(matches!(
            Playbook::from_yaml_str(yaml),
            Err(CalcError::Playbook { .. })
        ));
    }

    #[test]
    fn test_run_passes_with_calculator() {
        let playbook = Playbook::from_yaml_str(LEFT_TO_RIGHT).unwrap();
        let mut runner = PlaybookRunner::new(Calculator::new());
        let result = runner.run(&playbook);
        assert!(result.passed, "{}", result.render_report());
        assert_eq!(result.passed_steps(), 2);
        assert_eq!(result.final_state.display(), "20");
    }

    #[test]
    fn test_run_passes_with_keypad() {
        let playbook = Playbook::from_yaml_str(LEFT_TO_RIGHT).unwrap();
        let mut runner = PlaybookRunner::new(KeypadDriver::new());
        assert!(runner.run(&playbook).passed);
        assert_eq!(runner.driver().clicks().len(), 6);
    }

    #[test]
    fn test_run_resets_first() {
        let playbook = Playbook::from_yaml_str(LEFT_TO_RIGHT).unwrap();
        let mut calc = Calculator::new();
        calc.press_sequence("9 9 +").unwrap();
        let mut runner = PlaybookRunner::new(calc);
        assert!(runner.run(&playbook).passed);
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let yaml = r#"
name: wrong
steps:
  - press: "1 + 1 ="
    expect_display: "3"
  - press: "AC"
"#;
        let playbook = Playbook::from_yaml_str(yaml).unwrap();
        let result = PlaybookRunner::new(Calculator::new()).run(&playbook);
        assert!(!result.passed);
        assert_eq!(result.step_results.len(), 1);
        assert_eq!(result.step_results[0].name, "step 1");
        assert_eq!(
            result.step_results[0].failures,
            vec!["display: expected \"3\", got \"2\"".to_string()]
        );
    }

    #[test]
    fn test_operator_mismatch_reported() {
        let yaml = "steps:\n  - press: \"5 +\"\n    expect_operator: none\n";
        let playbook = Playbook::from_yaml_str(yaml).unwrap();
        let result = PlaybookRunner::new(Calculator::new()).run(&playbook);
        assert!(!result.passed);
        assert_eq!(
            result.step_results[0].failures[0],
            "operator: expected none, got +"
        );
    }

    #[test]
    fn test_invalid_symbol_fails_step() {
        let yaml = "steps:\n  - press: \"1 ^ 2\"\n";
        let playbook = Playbook::from_yaml_str(yaml).unwrap();
        let result = PlaybookRunner::new(Calculator::new()).run(&playbook);
        assert!(!result.passed);
        assert!(result.step_results[0].failures[0].contains("Invalid input"));
    }

    #[test]
    fn test_report_lists_steps() {
        let playbook = Playbook::from_yaml_str(LEFT_TO_RIGHT).unwrap();
        let result = PlaybookRunner::new(Calculator::new()).run(&playbook);
        let report = result.render_report();
        assert!(report.contains("[PASS] chain => 5"));
        assert!(report.ends_with("2/2 steps passed"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Playbook::load("/nonexistent/playbook.yaml").unwrap_err();
        assert!(matches!(err, CalcError::Io(_)));
    }
}
