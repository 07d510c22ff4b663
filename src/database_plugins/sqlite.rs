// ABOUTME: SQLite executor for the gym store abstraction
// ABOUTME: Binds typed parameters and decodes rows by storage class into JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` executor
//!
//! Binds [`SqlValue`] parameters onto a pooled `SQLite` connection and turns
//! result rows into JSON objects keyed by column name. Dates and times are
//! stored as text.

use super::schema::SQLITE_SCHEMA;
use super::{QueryExecutor, Row, SqlValue};
use crate::config::{DatabaseUrl, PoolConfig};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::query::Query;
use sqlx::{Column, Row as _, Sqlite, SqlitePool, TypeInfo, ValueRef};
use std::str::FromStr;
use tracing::{debug, info};

/// `SQLite` database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if missing) the database at `database_url`
    ///
    /// In-memory databases are pinned to a single connection so every
    /// statement sees the same data.
    ///
    /// # Errors
    ///
    /// Returns a database error if the URL is malformed or the connection fails
    pub async fn new(database_url: &str, pool_config: &PoolConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = DatabaseUrl::parse_url(database_url).is_memory();
        let max_connections = if in_memory {
            1
        } else {
            pool_config.max_connections
        };

        let pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(pool_config.acquire_timeout());
        // Closing the only connection would drop an in-memory database.
        let pool_options = if in_memory {
            pool_options.idle_timeout(None).max_lifetime(None)
        } else {
            pool_options.idle_timeout(pool_config.idle_timeout())
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open SQLite database: {e}")))?;

        debug!(max_connections, "SQLite pool ready");
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the gym tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns a database error if any table definition fails
    pub async fn migrate(&self) -> AppResult<()> {
        for ddl in SQLITE_SCHEMA {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to create table: {e}")))?;
        }
        info!(tables = SQLITE_SCHEMA.len(), "SQLite schema ready");
        Ok(())
    }
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Integer(v) => query.bind(*v),
        SqlValue::Real(v) => query.bind(*v),
        SqlValue::Text(v) => query.bind(v.clone()),
        SqlValue::Boolean(v) => query.bind(*v),
        SqlValue::Date(v) => query.bind(v.map(SqlValue::format_date)),
        SqlValue::Time(v) => query.bind(v.map(SqlValue::format_time)),
    }
}

/// Decode one column by its runtime storage class
fn decode_column(row: &SqliteRow, index: usize) -> AppResult<Value> {
    let raw = row
        .try_get_raw(index)
        .map_err(|e| AppError::database(format!("Failed to read column {index}: {e}")))?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage = raw.type_info().name().to_owned();

    let value = match storage.as_str() {
        "INTEGER" => row.try_get_unchecked::<i64, _>(index).map(Value::from),
        "REAL" => row.try_get_unchecked::<f64, _>(index).map(Value::from),
        "BLOB" => row
            .try_get_unchecked::<Vec<u8>, _>(index)
            .map(|bytes| Value::from(String::from_utf8_lossy(&bytes).into_owned())),
        _ => row.try_get_unchecked::<String, _>(index).map(Value::from),
    };

    value.map_err(|e| AppError::database(format!("Failed to decode {storage} column {index}: {e}")))
}

fn row_to_json(row: &SqliteRow) -> AppResult<Row> {
    let mut object = Row::new();
    for column in row.columns() {
        object.insert(column.name().to_owned(), decode_column(row, column.ordinal())?);
    }
    Ok(object)
}

#[async_trait]
impl QueryExecutor for SqliteDatabase {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> AppResult<Vec<Row>> {
        let query = params
            .iter()
            .fold(sqlx::query(sql), |query, value| bind_value(query, value));

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_json).collect()
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
