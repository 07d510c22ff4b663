// ABOUTME: PostgreSQL executor for the gym store abstraction
// ABOUTME: Binds typed parameters and decodes rows by column type into JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `PostgreSQL` executor

use super::schema::POSTGRES_SCHEMA;
use super::{QueryExecutor, Row, SqlValue};
use crate::config::PoolConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo};
use tracing::{debug, info};

/// `PostgreSQL` database implementation
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Connect a pool to `database_url`
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection fails
    pub async fn new(database_url: &str, pool_config: &PoolConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_config.max_connections)
            .idle_timeout(pool_config.idle_timeout())
            .acquire_timeout(pool_config.acquire_timeout())
            .connect(database_url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to PostgreSQL: {e}")))?;

        debug!(
            max_connections = pool_config.max_connections,
            "PostgreSQL pool ready"
        );
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the gym tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns a database error if any table definition fails
    pub async fn migrate(&self) -> AppResult<()> {
        for ddl in POSTGRES_SCHEMA {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to create table: {e}")))?;
        }
        info!(tables = POSTGRES_SCHEMA.len(), "PostgreSQL schema ready");
        Ok(())
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Integer(v) => query.bind(*v),
        SqlValue::Real(v) => query.bind(*v),
        SqlValue::Text(v) => query.bind(v.clone()),
        SqlValue::Boolean(v) => query.bind(*v),
        SqlValue::Date(v) => query.bind(*v),
        SqlValue::Time(v) => query.bind(*v),
    }
}

fn to_json<T>(value: Option<T>, convert: impl FnOnce(T) -> Value) -> Value {
    value.map_or(Value::Null, convert)
}

/// Decode one column according to its declared `PostgreSQL` type
fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    Ok(match type_name {
        "INT2" => to_json(row.try_get::<Option<i16>, _>(index)?, Value::from),
        "INT4" => to_json(row.try_get::<Option<i32>, _>(index)?, Value::from),
        "INT8" => to_json(row.try_get::<Option<i64>, _>(index)?, Value::from),
        "FLOAT4" => to_json(row.try_get::<Option<f32>, _>(index)?, |v| {
            Value::from(f64::from(v))
        }),
        "FLOAT8" => to_json(row.try_get::<Option<f64>, _>(index)?, Value::from),
        "BOOL" => to_json(row.try_get::<Option<bool>, _>(index)?, Value::from),
        "DATE" => to_json(row.try_get::<Option<NaiveDate>, _>(index)?, |d| {
            Value::from(SqlValue::format_date(d))
        }),
        "TIME" => to_json(row.try_get::<Option<NaiveTime>, _>(index)?, |t| {
            Value::from(SqlValue::format_time(t))
        }),
        "TIMESTAMP" => to_json(row.try_get::<Option<NaiveDateTime>, _>(index)?, |ts| {
            Value::from(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }),
        "TIMESTAMPTZ" => to_json(row.try_get::<Option<DateTime<Utc>>, _>(index)?, |ts| {
            Value::from(ts.to_rfc3339())
        }),
        _ => to_json(row.try_get::<Option<String>, _>(index)?, Value::from),
    })
}

fn row_to_json(row: &PgRow) -> AppResult<Row> {
    let mut object = Row::new();
    for column in row.columns() {
        let type_name = column.type_info().name();
        let value = decode_column(row, column.ordinal(), type_name).map_err(|e| {
            AppError::database(format!(
                "Failed to decode {type_name} column {}: {e}",
                column.name()
            ))
        })?;
        object.insert(column.name().to_owned(), value);
    }
    Ok(object)
}

#[async_trait]
impl QueryExecutor for PostgresDatabase {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> AppResult<Vec<Row>> {
        let query = params
            .iter()
            .fold(sqlx::query(sql), |query, value| bind_value(query, value));

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_json).collect()
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
