//! Tracing subscriber setup
//!
//! - One subscriber per process, installed at boot
//! - `RUST_LOG` overrides the default `info` filter
//! - Output is human-readable or one JSON object per line

use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Structured JSON, one event per line
    Json,
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing(format: LogFormat) -> ObservabilityResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_second_init_fails() {
        // Whichever call runs first may win; the second must report an error.
        let _ = init_tracing(LogFormat::Pretty);
        assert!(init_tracing(LogFormat::Json).is_err());
    }
}
