// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports service identity and whether the store answers a trivial query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check route for load balancers and uptime probes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::warn;

use crate::constants::SERVICE_NAME;
use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<Value>) {
        let store_ok = match resources.store.execute("SELECT 1", &[]).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Health check query failed: {e}");
                false
            }
        };
        let status = if store_ok {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        (
            status,
            Json(json!({
                "status": if store_ok { "healthy" } else { "unhealthy" },
                "service": SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "environment": resources.config.environment.to_string(),
                "database": resources.store.backend_name(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
    }
}
