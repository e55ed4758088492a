//! keycalc: command-line front end for the keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc eval 2 + 3 × 4 =          # prints 20
//! keycalc eval --format json 8 ÷    # full state as JSON
//! keycalc play checks.yaml          # run a playbook
//! keycalc keypad                    # show the button layout
//! keycalc repl                      # one batch of keys per line
//! ```

use clap::Parser;
use keypad_calc::{CalcConfig, CalcError};
use keypad_calc_cli::{handlers, logging, Cli, CliConfig, CliError, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    if !logging::init(config.verbosity) {
        tracing::debug!("tracing subscriber already installed");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval(args) => handlers::run_eval(&config, &args, &mut out),
        Commands::Play(args) => handlers::run_play(&config, &args, &mut out),
        Commands::Keypad => handlers::run_keypad(&mut out),
        Commands::Repl(args) => {
            let stdin = std::io::stdin();
            handlers::run_repl(&config, &args, stdin.lock(), &mut out)
        }
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    let calc = match &cli.config {
        Some(path) => CalcConfig::load(path).map_err(|e| match e {
            CalcError::Config { message } => CliError::config(message),
            other => other.into(),
        })?,
        None => CalcConfig::default(),
    };

    Ok(CliConfig::new().with_verbosity(verbosity).with_calc(calc))
}
