//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Install the tracing subscriber
//! 3. Start the async runtime and the HTTP server

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_tracing, log_event, Event, LogFormat};

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Configuration file structure
///
/// Every field is optional; an absent file means all defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Log output format (default "pretty")
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Build the effective configuration for a command
    pub fn resolve(args: &ServeArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(host) = &args.host {
            config.server.host = host.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Option<Command>) -> CliResult<()> {
    match cmd {
        None => serve(&ServeArgs::default()),
        Some(Command::Serve(args)) => serve(&args),
        Some(Command::Config(args)) => print_config(&args),
    }
}

/// Start the HTTP server and block until shutdown
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = Config::resolve(args)?;

    if let Err(e) = init_tracing(config.log_format) {
        eprintln!("{}", e);
    }
    log_event(Event::BootStart);
    tracing::info!(
        event = %Event::ConfigLoaded,
        addr = %config.server.socket_addr(),
        log_format = ?config.log_format
    );

    let server = HttpServer::with_config(config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration as pretty JSON
pub fn print_config(args: &ServeArgs) -> CliResult<()> {
    let config = Config::resolve(args)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
