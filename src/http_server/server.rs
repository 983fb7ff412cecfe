//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::future::Future;
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::item_routes::item_routes;
use super::root_routes::root_routes;
use super::state::ItemsState;
use crate::observability::{log_event, Event};

/// HTTP Server for items-service
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<ItemsState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(ItemsState::new()))
    }

    /// Create a new HTTP server over an existing state
    pub fn with_state(config: HttpServerConfig, state: Arc<ItemsState>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<ItemsState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(root_routes(Arc::clone(&state)))
            .merge(item_routes(state))
            .fallback(|| async { ApiError::route_not_found() })
            .layer(middleware::map_response(method_not_allowed_detail))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the shared state
    pub fn state(&self) -> Arc<ItemsState> {
        Arc::clone(&self.state)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server, serving until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        self.start_with_shutdown(shutdown_signal()).await
    }

    /// Start the HTTP server, serving until `shutdown` resolves
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(
            event = %Event::ServerListening,
            addr = %addr,
            "items API available at http://{}/items/",
            addr
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Gives the router's bare 405 the same `detail` body as every other error,
/// keeping its `Allow` header.
async fn method_not_allowed_detail(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
