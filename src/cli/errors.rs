//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use thiserror::Error;

/// Errors raised while resolving configuration or booting the server
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed, or holding invalid values
    #[error("ITEMS_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Runtime or listener could not start
    #[error("ITEMS_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),

    /// Effective config could not be rendered
    #[error("ITEMS_CLI_OUTPUT_ERROR: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "ITEMS_CLI_CONFIG_ERROR",
            Self::BootFailed(_) => "ITEMS_CLI_BOOT_FAILED",
            Self::Output(_) => "ITEMS_CLI_OUTPUT_ERROR",
        }
    }

    /// Error message without the code prefix
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::BootFailed(msg) => msg.clone(),
            Self::Output(e) => e.to_string(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::Config("bad port".to_string());
        assert_eq!(err.to_string(), "ITEMS_CLI_CONFIG_ERROR: bad port");
        assert_eq!(err.code(), "ITEMS_CLI_CONFIG_ERROR");
        assert_eq!(err.message(), "bad port");
    }

    #[test]
    fn test_display_starts_with_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            CliError::BootFailed("address in use".to_string()),
            CliError::from(json_err),
        ];
        for err in errors {
            assert!(err.to_string().starts_with(err.code()), "{}", err);
        }
    }
}
