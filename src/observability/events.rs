//! Observability events for items-service
//!
//! Every log line the service emits for lifecycle or request outcomes
//! carries one of these events in its `event` field.
//!
//! Events are explicit and typed.

use std::fmt;

use tracing::Level;

/// Observable events in items-service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Listener bound, ready for requests
    ServerListening,
    /// Shutdown initiated
    ShutdownStart,
    /// Shutdown complete
    ShutdownComplete,

    // Item operations
    /// Item stored under a fresh id
    ItemCreated,
    /// Item read by id
    ItemFetched,
    /// Requested id is not stored
    ItemNotFound,
    /// Request rejected by schema validation
    ValidationRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            // Boot & Lifecycle
            Event::BootStart => "ITEMS_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerListening => "ITEMS_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            // Items
            Event::ItemCreated => "ITEM_CREATED",
            Event::ItemFetched => "ITEM_FETCHED",
            Event::ItemNotFound => "ITEM_NOT_FOUND",
            Event::ValidationRejected => "VALIDATION_REJECTED",
        }
    }

    /// Level the event is logged at
    pub fn level(&self) -> Level {
        match self {
            Event::ItemFetched => Level::DEBUG,
            Event::ItemNotFound | Event::ValidationRejected => Level::WARN,
            _ => Level::INFO,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
