// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, router construction and seed-row helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `gym_server`

use std::env;
use std::sync::{Arc, Once};

use axum::Router;
use gym_server::{
    config::{PoolConfig, ServerConfig},
    database_plugins::{factory::Database, QueryExecutor, Row, SqlValue},
    resources::ServerResources,
    server::GymServer,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh, migrated in-memory database
pub async fn create_test_database() -> Arc<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:", &PoolConfig::default())
        .await
        .expect("Failed to open in-memory database");
    database.migrate().await.expect("Failed to create tables");
    Arc::new(database)
}

/// Full application router over the given database
pub fn test_router(database: &Arc<Database>) -> Router {
    let store: Arc<dyn QueryExecutor> = database.clone();
    let resources = Arc::new(ServerResources::new(store, ServerConfig::default()));
    GymServer::new(resources).router()
}

/// Database plus router in one call
pub async fn setup() -> (Arc<Database>, Router) {
    let database = create_test_database().await;
    let router = test_router(&database);
    (database, router)
}

fn text(value: &str) -> SqlValue {
    SqlValue::Text(Some(value.to_owned()))
}

async fn insert_returning_id(database: &Database, sql: &str, params: &[SqlValue]) -> i64 {
    let rows = database.execute(sql, params).await.expect("Seed insert failed");
    rows[0]
        .values()
        .next()
        .and_then(serde_json::Value::as_i64)
        .expect("Seed insert returned no id")
}

/// Insert a trainer and return its id
pub async fn seed_trainer(database: &Database, email: &str) -> i64 {
    insert_returning_id(
        database,
        "INSERT INTO entrenadores (nombre, apellido, email, especialidad) \
         VALUES ($1, $2, $3, $4) RETURNING id_entrenador",
        &[text("Laura"), text("Gómez"), text(email), text("Yoga")],
    )
    .await
}

/// Insert a client and return its id
pub async fn seed_client(database: &Database, email: &str) -> i64 {
    insert_returning_id(
        database,
        "INSERT INTO clientes (nombre, apellido, fecha_nacimiento, email, telefono) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id_cliente",
        &[
            text("Ana"),
            text("Ruiz"),
            text("1990-04-12"),
            text(email),
            text("555-0101"),
        ],
    )
    .await
}

/// Insert a class, optionally led by `trainer`, and return its id
pub async fn seed_class(database: &Database, name: &str, trainer: Option<i64>) -> i64 {
    insert_returning_id(
        database,
        "INSERT INTO clases (nombre_clase, descripcion, horario, dia_semana, id_entrenador) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id_clase",
        &[
            text(name),
            text("Sesión grupal"),
            text("08:00"),
            text("Lunes"),
            SqlValue::Integer(trainer),
        ],
    )
    .await
}

/// Insert a membership plan and return its id
pub async fn seed_membership(database: &Database, tipo: &str, precio: f64) -> i64 {
    insert_returning_id(
        database,
        "INSERT INTO membresias (tipo, precio, duracion_meses) \
         VALUES ($1, $2, $3) RETURNING id_membresia",
        &[text(tipo), SqlValue::Real(Some(precio)), SqlValue::Integer(Some(1))],
    )
    .await
}

/// Insert a payment and return its id
pub async fn seed_payment(database: &Database, client: i64, membership: i64, monto: f64) -> i64 {
    insert_returning_id(
        database,
        "INSERT INTO pagos (id_cliente, id_membresia, monto) \
         VALUES ($1, $2, $3) RETURNING id_pago",
        &[
            SqlValue::Integer(Some(client)),
            SqlValue::Integer(Some(membership)),
            SqlValue::Real(Some(monto)),
        ],
    )
    .await
}

/// Read one row straight from the store
pub async fn fetch_row(database: &Database, table: &str, key: &str, id: i64) -> Option<Row> {
    database
        .execute(
            &format!("SELECT * FROM {table} WHERE {key} = $1"),
            &[SqlValue::Integer(Some(id))],
        )
        .await
        .expect("Fetch failed")
        .into_iter()
        .next()
}
