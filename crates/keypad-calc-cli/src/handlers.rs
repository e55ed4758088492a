//! Command handlers
//!
//! Handlers write to a caller-supplied writer so they can be tested without
//! spawning the binary.

use crate::commands::{EvalArgs, PlayArgs, ReplArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use keypad_calc::driver::{CalculatorDriver, KeypadDriver};
use keypad_calc::keypad::Keypad;
use keypad_calc::playbook::{Playbook, PlaybookRunner};
use keypad_calc::{Calculator, CalculatorState};
use std::io::{BufRead, Write};
use tracing::info;

fn write_state(out: &mut impl Write, state: &CalculatorState, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", state.display())?,
        OutputFormat::Json => writeln!(out, "{}", state.to_json()?)?,
    }
    Ok(())
}

/// Execute `keycalc eval`
pub fn run_eval(config: &CliConfig, args: &EvalArgs, out: &mut impl Write) -> CliResult<()> {
    let mut calc = Calculator::with_config(config.calc.clone());
    calc.press_sequence(&args.keys.join(" "))?;
    write_state(out, calc.state(), args.format)
}

/// Execute `keycalc play`
pub fn run_play(config: &CliConfig, args: &PlayArgs, out: &mut impl Write) -> CliResult<()> {
    let playbook = Playbook::load(&args.playbook)?;
    info!(path = %args.playbook.display(), steps = playbook.steps.len(), "loaded playbook");

    let calc = Calculator::with_config(config.calc.clone());
    let result = if args.keypad {
        PlaybookRunner::new(KeypadDriver::with_calculator(calc)).run(&playbook)
    } else {
        PlaybookRunner::new(calc).run(&playbook)
    };

    if !config.verbosity.is_quiet() {
        writeln!(out, "{}", result.render_report())?;
    }

    if result.passed {
        Ok(())
    } else {
        Err(CliError::playbook_failed(format!(
            "{}/{} steps passed",
            result.passed_steps(),
            playbook.steps.len()
        )))
    }
}

/// Execute `keycalc keypad`
pub fn run_keypad(out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "{}", Keypad::new().render_grid())?;
    Ok(())
}

/// Execute `keycalc repl`.
///
/// Each input line is one batch of symbols. A bad symbol reports an error and
/// leaves the state as it was before that line; `quit` or end of input stops.
pub fn run_repl(
    config: &CliConfig,
    args: &ReplArgs,
    input: impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut calc = Calculator::with_config(config.calc.clone());

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let before = calc.clone();
        match CalculatorDriver::press_all(&mut calc, line) {
            Ok(()) => write_state(out, calc.state(), args.format)?,
            Err(e) => {
                calc = before;
                writeln!(out, "error: {e}")?;
            }
        }
    }
    Ok(())
}
