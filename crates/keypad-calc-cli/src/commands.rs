//! CLI command definitions using clap

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// keycalc: press calculator buttons from the command line
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Calculator configuration file (YAML)
    #[arg(long, global = true, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press buttons and print the display
    Eval(EvalArgs),

    /// Run a key-press playbook
    Play(PlayArgs),

    /// Print the keypad layout
    Keypad,

    /// Read button symbols from stdin, one batch per line
    Repl(ReplArgs),
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Button symbols, e.g. `2 + 3 × 4 =` (`*`, `/`, `+/-`, `C` also accepted)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub keys: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the play command
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Playbook file (YAML)
    pub playbook: PathBuf,

    /// Press buttons through the keypad layout instead of the bare engine
    #[arg(long)]
    pub keypad: bool,
}

/// Arguments for the repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}
