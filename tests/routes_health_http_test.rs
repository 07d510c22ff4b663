// ABOUTME: HTTP integration tests for the health route and router-wide behavior
// ABOUTME: Covers the health payload, the JSON 404 fallback, request ids and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_healthy_store() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::get("/health").send(router).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gym-server");
    assert_eq!(body["database"], "sqlite");
    assert_eq!(body["environment"], "development");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::get("/api/unknown").send(router).await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn test_responses_carry_generated_request_id() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::get("/health").send(router).await;

    let request_id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok(), "{request_id}");
}

#[tokio::test]
async fn test_incoming_request_id_is_propagated() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::get("/api/clients")
        .header("x-request-id", "trace-me-123")
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("x-request-id"), Some("trace-me-123"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:5173")
        .send(router)
        .await;

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_zero_and_negative_ids_are_invalid() {
    let (_db, router) = common::setup().await;

    for path in ["/api/trainers/0", "/api/trainers/-3", "/api/trainers/1.5"] {
        let response = AxumTestRequest::get(path).send(router.clone()).await;
        assert_eq!(response.status(), 400, "{path}");
        let body: Value = response.json();
        assert_eq!(body["message"], "ID inválido");
    }
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::post("/api/memberships")
        .raw_json("{\"tipo\": ")
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    assert!(response.text().contains("message"));
}
