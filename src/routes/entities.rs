// ABOUTME: CRUD route handlers for the gym entities under /api/<resource>
// ABOUTME: Parses path ids and JSON bodies, then delegates to the resource service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Entity routes
//!
//! Every entity exposes the same five endpoints; the handlers are generic
//! and the entity schema travels in the router state.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::messages::{INVALID_BODY, INVALID_ID};
use crate::entities::{CLASSES, CLIENTS, INSCRIPTIONS, MEMBERSHIPS, PAYMENTS, TRAINERS};
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::services::ResourceService;
use crate::updates::EntitySchema;

/// Mount point and schema of every served entity
static MOUNTS: [(&str, &EntitySchema); 6] = [
    ("/api/clients", &CLIENTS),
    ("/api/trainers", &TRAINERS),
    ("/api/classes", &CLASSES),
    ("/api/memberships", &MEMBERSHIPS),
    ("/api/inscriptions", &INSCRIPTIONS),
    ("/api/payments", &PAYMENTS),
];

/// Router state for one entity
#[derive(Clone)]
struct EntityState {
    resources: Arc<ServerResources>,
    schema: &'static EntitySchema,
}

impl EntityState {
    fn service(&self) -> ResourceService<'_> {
        ResourceService::new(self.resources.store.as_ref(), self.schema)
    }
}

/// Entity routes implementation
pub struct EntityRoutes;

impl EntityRoutes {
    /// Routes for all six entities
    pub fn routes(resources: &Arc<ServerResources>) -> Router {
        MOUNTS
            .into_iter()
            .fold(Router::new(), |router, (base, schema)| {
                router.merge(Self::entity_routes(base, schema, Arc::clone(resources)))
            })
    }

    /// Routes for one entity mounted at `base`
    pub fn entity_routes(
        base: &str,
        schema: &'static EntitySchema,
        resources: Arc<ServerResources>,
    ) -> Router {
        Router::new()
            .route(base, get(Self::handle_list).post(Self::handle_create))
            .route(
                &format!("{base}/:id"),
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(EntityState { resources, schema })
    }

    async fn handle_list(State(state): State<EntityState>) -> Result<Response, AppError> {
        let rows = state.service().list().await?;
        Ok((StatusCode::OK, Json(rows)).into_response())
    }

    async fn handle_get(
        State(state): State<EntityState>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_resource_id(&id)?;
        let row = state.service().get(id).await?;
        Ok((StatusCode::OK, Json(row)).into_response())
    }

    async fn handle_create(
        State(state): State<EntityState>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let payload = parse_body(body)?;
        let row = state.service().create(&payload).await?;
        Ok((StatusCode::CREATED, Json(row)).into_response())
    }

    async fn handle_update(
        State(state): State<EntityState>,
        Path(id): Path<String>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = parse_resource_id(&id)?;
        let payload = parse_body(body)?;
        let row = state.service().update(id, &payload).await?;
        Ok((StatusCode::OK, Json(row)).into_response())
    }

    async fn handle_delete(
        State(state): State<EntityState>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_resource_id(&id)?;
        let body = state.service().delete(id).await?;
        Ok((StatusCode::OK, Json(body)).into_response())
    }
}

/// Positive integer id from a path segment
///
/// # Errors
///
/// Returns an invalid-input error for anything else
pub fn parse_resource_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_input(INVALID_ID))
}

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Map<String, Value>> {
    match body {
        Ok(Json(Value::Object(payload))) => Ok(payload),
        Ok(Json(_)) => Err(AppError::invalid_input(INVALID_BODY)),
        Err(rejection) => {
            debug!("Rejected request body: {rejection}");
            Err(AppError::invalid_input(INVALID_BODY))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_id() {
        assert_eq!(parse_resource_id("42").unwrap(), 42);
        for bad in ["abc", "0", "-3", "1.5", "", " 7"] {
            let err = parse_resource_id(bad).unwrap_err();
            assert_eq!(err.message, INVALID_ID, "{bad:?}");
            assert_eq!(err.http_status(), 400);
        }
    }

    #[test]
    fn test_body_must_be_object() {
        let err = parse_body(Ok(Json(serde_json::json!([1, 2])))).unwrap_err();
        assert_eq!(err.message, INVALID_BODY);
        let payload = parse_body(Ok(Json(serde_json::json!({ "monto": 60 })))).unwrap();
        assert!(payload.contains_key("monto"));
    }
}
