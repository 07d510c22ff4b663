// ABOUTME: HTTP integration tests for the class routes
// ABOUTME: Covers partial updates, trainer references, weekday and time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

// ============================================================================
// PUT /api/classes/:id - Partial Update
// ============================================================================

#[tokio::test]
async fn test_update_rejects_unknown_weekday() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "dia_semana": "Doomsday" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.to_lowercase().contains("dia_semana"), "{message}");
}

#[tokio::test]
async fn test_update_rejects_missing_trainer_and_leaves_row_untouched() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "id_entrenador": 9999, "nombre_clase": "Test" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Entrenador especificado no existe");

    let row = common::fetch_row(&db, "clases", "id_clase", id).await.unwrap();
    assert_eq!(row["nombre_clase"], "Yoga");
}

#[tokio::test]
async fn test_update_missing_class_is_not_found() {
    let (db, router) = common::setup().await;
    let trainer = common::seed_trainer(&db, "laura@gym.com").await;

    let response = AxumTestRequest::put("/api/classes/4242")
        .json(&json!({
            "nombre_clase": "Pilates",
            "horario": "18:30",
            "dia_semana": "Martes",
            "id_entrenador": trainer
        }))
        .send(router)
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Clase no encontrada");
}

#[tokio::test]
async fn test_update_with_empty_payload_is_rejected() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({}))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "No hay campos para actualizar");
}

#[tokio::test]
async fn test_update_with_only_unknown_keys_is_rejected() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "id_clase": 77, "color": "azul" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let (db, router) = common::setup().await;
    let trainer = common::seed_trainer(&db, "laura@gym.com").await;
    let id = common::seed_class(&db, "Yoga", Some(trainer)).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "horario": "19:45" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["id_clase"], id);
    assert_eq!(body["horario"], "19:45");
    assert_eq!(body["nombre_clase"], "Yoga");
    assert_eq!(body["dia_semana"], "Lunes");
    assert_eq!(body["id_entrenador"], trainer);
}

#[tokio::test]
async fn test_update_null_trainer_disassociates() {
    let (db, router) = common::setup().await;
    let trainer = common::seed_trainer(&db, "laura@gym.com").await;
    let id = common::seed_class(&db, "Yoga", Some(trainer)).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "id_entrenador": null }))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(body["id_entrenador"].is_null());

    let row = common::fetch_row(&db, "clases", "id_clase", id).await.unwrap();
    assert!(row["id_entrenador"].is_null());
}

#[tokio::test]
async fn test_update_numeric_string_trainer_is_stored_as_integer() {
    let (db, router) = common::setup().await;
    let trainer = common::seed_trainer(&db, "laura@gym.com").await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "id_entrenador": trainer.to_string() }))
        .send(router)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["id_entrenador"], json!(trainer));
}

#[tokio::test]
async fn test_update_non_numeric_trainer_is_invalid() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&json!({ "id_entrenador": "abc" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "id_entrenador inválido");
}

#[tokio::test]
async fn test_update_rejects_out_of_range_time() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    for horario in ["99:99", "1:00", "00:60"] {
        let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
            .json(&json!({ "horario": horario }))
            .send(router.clone())
            .await;
        assert_eq!(response.status(), 400, "{horario}");
        let body: Value = response.json();
        assert_eq!(body["message"], "horario debe tener formato HH:MM");
    }
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;
    let payload = json!({ "nombre_clase": "Spinning", "dia_semana": "Miércoles" });

    let first: Value = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&payload)
        .send(router.clone())
        .await
        .json();
    let second: Value = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .json(&payload)
        .send(router)
        .await
        .json();

    assert_eq!(first, second);
    assert_eq!(second["dia_semana"], "Miércoles");
}

#[tokio::test]
async fn test_update_rejects_non_integer_path_id() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::put("/api/classes/abc")
        .json(&json!({ "nombre_clase": "Yoga" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "ID inválido");
}

#[tokio::test]
async fn test_update_rejects_non_object_body() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::put(&format!("/api/classes/{id}"))
        .raw_json("[1, 2, 3]")
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// Create, read, delete
// ============================================================================

#[tokio::test]
async fn test_create_class() {
    let (db, router) = common::setup().await;
    let trainer = common::seed_trainer(&db, "laura@gym.com").await;

    let response = AxumTestRequest::post("/api/classes")
        .json(&json!({
            "nombre_clase": "  Crossfit ",
            "horario": "07:15",
            "dia_semana": "Sabado",
            "id_entrenador": trainer
        }))
        .send(router)
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["nombre_clase"], "Crossfit");
    assert_eq!(body["horario"], "07:15");
    assert!(body["descripcion"].is_null());
    assert!(body["id_clase"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_class_requires_name() {
    let (_db, router) = common::setup().await;

    let response = AxumTestRequest::post("/api/classes")
        .json(&json!({ "horario": "07:15", "dia_semana": "Lunes" }))
        .send(router)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "nombre_clase es obligatorio y debe tener al menos 2 caracteres"
    );
}

#[tokio::test]
async fn test_list_classes_includes_trainer_names() {
    let (db, router) = common::setup().await;
    let trainer = common::seed_trainer(&db, "laura@gym.com").await;
    let first = common::seed_class(&db, "Yoga", Some(trainer)).await;
    let second = common::seed_class(&db, "Boxeo", None).await;

    let response = AxumTestRequest::get("/api/classes").send(router).await;

    assert_eq!(response.status(), 200);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["id_clase"], first);
    assert_eq!(body[0]["entrenador_nombre"], "Laura");
    assert_eq!(body[1]["id_clase"], second);
    assert!(body[1]["entrenador_nombre"].is_null());
}

#[tokio::test]
async fn test_get_class_by_id() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::get(&format!("/api/classes/{id}"))
        .send(router.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["nombre_clase"], "Yoga");

    let response = AxumTestRequest::get("/api/classes/999").send(router).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_class_returns_envelope() {
    let (db, router) = common::setup().await;
    let id = common::seed_class(&db, "Yoga", None).await;

    let response = AxumTestRequest::delete(&format!("/api/classes/{id}"))
        .send(router.clone())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Clase eliminada correctamente");
    assert_eq!(body["clase"]["id_clase"], id);

    let response = AxumTestRequest::delete(&format!("/api/classes/{id}"))
        .send(router)
        .await;
    assert_eq!(response.status(), 404);
}
