//! # items-service HTTP Server Module
//!
//! This module provides the HTTP API over the item store.
//! It combines all endpoint routers into a unified Axum server.
//!
//! # Endpoints
//!
//! - `/` - Greeting
//! - `/health` - Health check
//! - `/items/*` - Item create and read

pub mod config;
pub mod errors;
pub mod item_routes;
pub mod root_routes;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::ItemsState;
