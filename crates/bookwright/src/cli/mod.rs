//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the bookwright binary.

mod commands;
mod run;
mod tools;

pub use commands::{Cli, Commands};
pub use run::{StageSelection, run_stages};
pub use tools::{migrate, show_outline};
