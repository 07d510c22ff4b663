// ABOUTME: Partial update engine turning a sparse field map into a single-row UPDATE
// ABOUTME: Runs diff, validation, uniqueness and reference checks before executing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Partial Update Engine
//!
//! One update moves through fixed stages:
//!
//! ```text
//! RECEIVED -> DIFF_RESOLVED -> FIELDS_VALIDATED -> FKS_VALIDATED
//!          -> STATEMENT_BUILT -> EXECUTED -> FOUND | NOT_FOUND
//! ```
//!
//! Any check may reject the request with a 400 before the store sees an
//! `UPDATE`; a failing store call ends in a 500 carrying the entity's
//! generic update message. No transaction spans the reference checks and
//! the write.

use super::diff::{self, DiffMode};
use super::references::{check_references, check_unique};
use super::schema::EntitySchema;
use super::statement::build_update;
use super::validation::validate_changes;
use crate::constants::messages::NO_FIELDS_TO_UPDATE;
use crate::database_plugins::{QueryExecutor, Row};
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

/// Schema-driven partial updates over an injected store handle
#[derive(Clone, Copy)]
pub struct PartialUpdateEngine<'a> {
    store: &'a dyn QueryExecutor,
}

impl<'a> PartialUpdateEngine<'a> {
    /// Create an engine borrowing the given store
    #[must_use]
    pub const fn new(store: &'a dyn QueryExecutor) -> Self {
        Self { store }
    }

    /// Apply the fields present in `payload` to row `id` of `schema`
    ///
    /// # Errors
    ///
    /// - invalid input when no updatable field is present or a value is malformed
    /// - invalid reference when a foreign key names a missing row
    /// - conflict when a unique value belongs to another row
    /// - not found when no row has this id
    /// - database error, relabelled with the entity's update message, when the store fails
    #[instrument(skip(self, schema, payload), fields(table = schema.table))]
    pub async fn apply(
        &self,
        schema: &EntitySchema,
        id: i64,
        payload: &Map<String, Value>,
    ) -> AppResult<Row> {
        self.run(schema, id, payload)
            .await
            .map_err(|e| e.with_public_message(schema.messages.update_failed))
    }

    async fn run(
        &self,
        schema: &EntitySchema,
        id: i64,
        payload: &Map<String, Value>,
    ) -> AppResult<Row> {
        let changes = diff::resolve(schema, payload, DiffMode::Update);
        if changes.is_empty() {
            debug!("Rejected update with no recognised fields");
            return Err(AppError::invalid_input(NO_FIELDS_TO_UPDATE));
        }
        debug!(fields = changes.len(), "Diff resolved");

        let assignments = validate_changes(&changes).inspect_err(|e| {
            debug!(field = ?e.context.field, "Field validation failed: {}", e.message);
        })?;
        debug!("Fields validated");

        check_unique(self.store, schema, &assignments, Some(id)).await?;
        check_references(self.store, &assignments).await?;
        debug!("References validated");

        let field_count = assignments.len();
        let statement = build_update(schema, assignments, id);
        debug!(sql = %statement.text, "Statement built");

        let mut rows = self.store.execute(&statement.text, &statement.params).await?;
        if rows.is_empty() {
            debug!("No row matched");
            return Err(AppError::not_found(schema.messages.not_found));
        }

        info!(
            table = schema.table,
            id,
            fields = field_count,
            "Updated {}",
            schema.name
        );
        Ok(canonicalize(schema, rows.swap_remove(0)))
    }
}

/// Shape a stored row for the caller
///
/// Flag columns read back as `0`/`1` on backends without a boolean type
/// are turned into JSON booleans.
#[must_use]
pub fn canonicalize(schema: &EntitySchema, mut row: Row) -> Row {
    for column in schema.bool_columns {
        if let Some(value) = row.get_mut(*column) {
            if let Some(n) = value.as_i64() {
                *value = Value::Bool(n != 0);
            }
        }
    }
    row
}
