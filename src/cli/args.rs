//! CLI argument definitions using clap
//!
//! Commands:
//! - items-service serve [--config <path>] [--host <host>] [--port <port>]
//! - items-service config [--config <path>] [--host <host>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// items-service - In-memory item HTTP service
#[derive(Parser, Debug)]
#[command(name = "items-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the effective configuration as JSON and exit
    Config(ServeArgs),
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Path to an optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
