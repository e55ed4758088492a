//! keycalc CLI library
//!
//! Command definitions, configuration and handlers for the `keycalc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{Cli, Commands, EvalArgs, PlayArgs, ReplArgs};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
