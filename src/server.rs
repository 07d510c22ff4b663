// ABOUTME: HTTP server assembly for the gym API: router, middleware layers and serve loop
// ABOUTME: Wires request ids, tracing spans, CORS and the JSON 404 fallback around the routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::StatusCode, response::IntoResponse, Json, Router};
use http::{HeaderName, Response};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Span};

use crate::constants::messages::ROUTE_NOT_FOUND;
use crate::errors::{AppError, AppResult};
use crate::middleware::{make_request_span, record_response, setup_cors, REQUEST_ID_HEADER};
use crate::resources::ServerResources;
use crate::routes::{EntityRoutes, HealthRoutes};

/// The gym HTTP server
pub struct GymServer {
    resources: Arc<ServerResources>,
}

impl GymServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Full application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
                        record_response(response, latency, span);
                    }),
            )
            .layer(PropagateRequestIdLayer::new(request_id));

        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .merge(EntityRoutes::routes(&self.resources))
            .fallback(handle_not_found)
            .layer(middleware)
            .layer(setup_cors(&self.resources.config.cors))
    }

    /// Bind the configured address and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an internal error if the address cannot be bound or the
    /// server stops abnormally
    pub async fn run(&self) -> AppResult<()> {
        let addr = self.resources.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
        info!("Gym API listening on http://{addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn handle_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": ROUTE_NOT_FOUND })),
    )
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        // Keep serving; the process can still be stopped externally.
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
