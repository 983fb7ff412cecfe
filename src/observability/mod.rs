//! Observability subsystem for items-service
//!
//! This module provides:
//! - Structured logging through `tracing`
//! - Typed lifecycle and request events
//!
//! # Usage
//!
//! ```ignore
//! use items_service::observability::{init_tracing, log_event, Event, LogFormat};
//!
//! init_tracing(LogFormat::Json)?;
//! log_event(Event::BootStart);
//! tracing::info!(event = %Event::ItemCreated, id = 1, "item created");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_tracing, LogFormat};

use thiserror::Error;
use tracing::Level;

/// Observability error
///
/// Observability failure must never stop the service from serving.
#[derive(Debug, Error)]
#[error("ITEMS_OBSERVABILITY_FAILED: {message}")]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event at its own level
pub fn log_event(event: Event) {
    match event.level() {
        Level::ERROR => tracing::error!(event = event.as_str()),
        Level::WARN => tracing::warn!(event = event.as_str()),
        Level::INFO => tracing::info!(event = event.as_str()),
        Level::DEBUG => tracing::debug!(event = event.as_str()),
        _ => tracing::trace!(event = event.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_error_display() {
        let err = ObservabilityError::new("test message");
        let display = err.to_string();
        assert!(display.contains("ITEMS_OBSERVABILITY_FAILED"));
        assert!(display.contains("test message"));
        assert_eq!(err.message(), "test message");
    }

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event(Event::ItemNotFound);
        log_event(Event::ItemFetched);
    }
}
