//! CLI module for items-service
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server (default when no command is given)
//! - config: Print the effective configuration and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{print_config, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
