// ABOUTME: Schema-driven list, get, create, update and delete for any gym entity
// ABOUTME: Keeps route handlers free of SQL; store failures carry the entity's public message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::database_plugins::{QueryExecutor, Row, SqlValue};
use crate::errors::{AppError, AppResult};
use crate::updates::statement::{build_delete, build_flag_update, build_insert};
use crate::updates::{
    canonicalize, check_references, check_unique, validate_new, Deletion, EntitySchema,
    PartialUpdateEngine,
};

/// Operations on one entity backed by an injected store handle
#[derive(Clone, Copy)]
pub struct ResourceService<'a> {
    store: &'a dyn QueryExecutor,
    schema: &'static EntitySchema,
}

impl<'a> ResourceService<'a> {
    /// Bind a service to a store and an entity
    #[must_use]
    pub const fn new(store: &'a dyn QueryExecutor, schema: &'static EntitySchema) -> Self {
        Self { store, schema }
    }

    /// Entity this service serves
    #[must_use]
    pub const fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    /// Every row, ordered by primary key
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn list(&self) -> AppResult<Vec<Row>> {
        let rows = self
            .store
            .execute(&self.schema.list_sql(), &[])
            .await
            .map_err(|e| e.with_public_message(self.schema.messages.list_failed))?;
        debug!(table = self.schema.table, count = rows.len(), "Listed rows");
        Ok(rows
            .into_iter()
            .map(|row| canonicalize(self.schema, row))
            .collect())
    }

    /// One row by primary key
    ///
    /// # Errors
    ///
    /// Returns not found when no row matches, or a database error if the
    /// query fails
    pub async fn get(&self, id: i64) -> AppResult<Row> {
        let rows = self
            .store
            .execute(&self.schema.get_sql(), &[SqlValue::Integer(Some(id))])
            .await
            .map_err(|e| e.with_public_message(self.schema.messages.get_failed))?;
        self.single(rows)
    }

    /// Insert a new row from `payload`
    ///
    /// Required fields must be present and non-null; `0`, `""` and `false`
    /// are values and go through their field's rule like any other.
    ///
    /// # Errors
    ///
    /// Returns a missing-field or invalid-input error, a conflict for a taken
    /// unique value, an invalid reference for a missing foreign row, or a
    /// database error if a statement fails
    pub async fn create(&self, payload: &Map<String, Value>) -> AppResult<Row> {
        self.insert(payload)
            .await
            .map_err(|e| e.with_public_message(self.schema.messages.create_failed))
    }

    async fn insert(&self, payload: &Map<String, Value>) -> AppResult<Row> {
        let assignments = validate_new(self.schema, payload)?;
        check_unique(self.store, self.schema, &assignments, None).await?;
        check_references(self.store, &assignments).await?;

        let statement = build_insert(self.schema, assignments);
        let rows = self.store.execute(&statement.text, &statement.params).await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| AppError::database("Insert returned no row"))?;

        info!(
            table = self.schema.table,
            id = ?row.get(self.schema.primary_key),
            "Created {}",
            self.schema.name
        );
        Ok(canonicalize(self.schema, row))
    }

    /// Apply a partial update through the [`PartialUpdateEngine`]
    ///
    /// # Errors
    ///
    /// See [`PartialUpdateEngine::apply`]
    pub async fn update(&self, id: i64, payload: &Map<String, Value>) -> AppResult<Row> {
        PartialUpdateEngine::new(self.store)
            .apply(self.schema, id, payload)
            .await
    }

    /// Remove, or deactivate, one row
    ///
    /// # Errors
    ///
    /// Returns not found when no row matches, or a database error if the
    /// statement fails
    pub async fn delete(&self, id: i64) -> AppResult<Value> {
        let statement = match self.schema.deletion {
            Deletion::Soft { column } => build_flag_update(self.schema, column, false, id),
            Deletion::Hard | Deletion::HardWithEnvelope { .. } => build_delete(self.schema, id),
        };
        let rows = self
            .store
            .execute(&statement.text, &statement.params)
            .await
            .map_err(|e| e.with_public_message(self.schema.messages.delete_failed))?;
        let messages = &self.schema.messages;
        let row = rows
            .into_iter()
            .next()
            .map(|row| Value::Object(canonicalize(self.schema, row)))
            .ok_or_else(|| {
                AppError::not_found(messages.delete_not_found.unwrap_or(messages.not_found))
            })?;

        info!(table = self.schema.table, id, "Deleted {}", self.schema.name);
        Ok(match self.schema.deletion {
            Deletion::HardWithEnvelope { message, key } => {
                let mut envelope = Map::new();
                envelope.insert("message".to_owned(), json!(message));
                envelope.insert(key.to_owned(), row);
                Value::Object(envelope)
            }
            Deletion::Hard | Deletion::Soft { .. } => row,
        })
    }

    fn single(&self, rows: Vec<Row>) -> AppResult<Row> {
        rows.into_iter()
            .next()
            .map(|row| canonicalize(self.schema, row))
            .ok_or_else(|| AppError::not_found(self.schema.messages.not_found))
    }
}
