//! Main webserver implementation
//!
//! The `WebServer` struct owns the shared state and the record store injected
//! at startup, builds the axum router and runs it until shutdown.

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::warn;

use shared::logging;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::RecordStore;
use crate::web::handlers::api::{
    get_contact, get_pickup, get_quote, health_check, not_found, submit_contact, submit_pickup, submit_quote,
    track_shipment,
};

/// Main webserver struct with dependency injection
pub struct WebServer<S> {
    state: Arc<WebServerState<S>>,
    static_dir: Option<PathBuf>,
}

impl<S> WebServer<S>
where
    S: RecordStore + 'static,
{
    /// Create a new webserver around a record store
    pub fn new(store: S) -> Self {
        Self {
            state: Arc::new(WebServerState::new(store)),
            static_dir: None,
        }
    }

    /// Serve a pre-built site bundle for every non-API path
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }

    /// Build the Axum router with all routes
    ///
    /// Unmatched `/api/*` paths always get the JSON 404; everything else falls
    /// through to the static site when one is configured.
    pub fn build_router(&self) -> Router {
        let api = Router::new()
            // Form submissions
            .route("/contact", post(submit_contact::<S>))
            .route("/pickup", post(submit_pickup::<S>))
            .route("/quote", post(submit_quote::<S>))

            // Lookups
            .route("/track/:tracking_number", get(track_shipment::<S>))
            .route("/contact/:id", get(get_contact::<S>))
            .route("/pickup/:id", get(get_pickup::<S>))
            .route("/quote/:id", get(get_quote::<S>))
            .fallback(not_found);

        let router = Router::new()
            .nest("/api", api)
            // Health check
            .route("/health", get(health_check::<S>))
            .with_state(self.state.clone());

        let router = match &self.static_dir {
            Some(dir) if dir.is_dir() => router.fallback_service(ServeDir::new(dir)),
            Some(dir) => {
                warn!("Static directory {} not found, serving API only", dir.display());
                router.fallback(not_found)
            }
            None => router.fallback(not_found),
        };

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    }

    /// Bind and serve until Ctrl+C
    pub async fn run(&self, bind_address: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        logging::log_startup(&format!(
            "courier webserver on http://{} ({} store)",
            bind_address,
            self.state.store.backend_name()
        ));

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => logging::log_error("Signal handling", &err),
    }
}
