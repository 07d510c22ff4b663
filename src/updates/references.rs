// ABOUTME: Existence and uniqueness lookups run against the store before a write
// ABOUTME: Foreign keys are checked in schema order and stop at the first missing row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::schema::EntitySchema;
use super::validation::Assignment;
use crate::database_plugins::{QueryExecutor, SqlValue};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::slice;
use tracing::debug;

/// Row lookups needed to validate a write
#[async_trait]
pub trait ReferenceLookup: Send + Sync {
    /// Whether `table` has a row whose `key_column` equals `id`
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup statement fails
    async fn exists_by_id(&self, table: &str, key_column: &str, id: i64) -> AppResult<bool>;

    /// Whether another row of `table` already holds `value` in `column`
    ///
    /// The row identified by `exclude_id` (the one being updated) is ignored.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup statement fails
    async fn value_taken(
        &self,
        table: &str,
        column: &str,
        value: &SqlValue,
        key_column: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool>;
}

#[async_trait]
impl<E> ReferenceLookup for E
where
    E: QueryExecutor + ?Sized,
{
    async fn exists_by_id(&self, table: &str, key_column: &str, id: i64) -> AppResult<bool> {
        let sql = format!("SELECT {key_column} FROM {table} WHERE {key_column} = $1 LIMIT 1");
        let rows = self.execute(&sql, &[SqlValue::Integer(Some(id))]).await?;
        Ok(!rows.is_empty())
    }

    async fn value_taken(
        &self,
        table: &str,
        column: &str,
        value: &SqlValue,
        key_column: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool> {
        let rows = if let Some(id) = exclude_id {
            let sql = format!(
                "SELECT {key_column} FROM {table} WHERE {column} = $1 AND {key_column} <> $2 LIMIT 1"
            );
            self.execute(&sql, &[value.clone(), SqlValue::Integer(Some(id))])
                .await?
        } else {
            let sql = format!("SELECT {key_column} FROM {table} WHERE {column} = $1 LIMIT 1");
            self.execute(&sql, slice::from_ref(value)).await?
        };
        Ok(!rows.is_empty())
    }
}

/// Check every non-null foreign key, in order, stopping at the first missing row
///
/// # Errors
///
/// Returns an invalid-reference error naming the referenced entity, or a
/// database error if a lookup fails
pub async fn check_references<L>(lookup: &L, assignments: &[Assignment]) -> AppResult<()>
where
    L: ReferenceLookup + ?Sized,
{
    for assignment in assignments {
        let Some(fk) = assignment.field.foreign_key() else {
            continue;
        };
        let Some(id) = assignment.value.as_integer() else {
            continue;
        };
        debug!(field = assignment.field.key, table = fk.table, id, "Checking reference");
        if !lookup.exists_by_id(fk.table, fk.key_column, id).await? {
            return Err(AppError::invalid_reference(fk.missing_message)
                .with_field(assignment.field.key));
        }
    }
    Ok(())
}

/// Check unique fields against other rows of the entity's table
///
/// # Errors
///
/// Returns a conflict error with the field's message, or a database error if
/// a lookup fails
pub async fn check_unique<L>(
    lookup: &L,
    schema: &EntitySchema,
    assignments: &[Assignment],
    exclude_id: Option<i64>,
) -> AppResult<()>
where
    L: ReferenceLookup + ?Sized,
{
    for assignment in assignments {
        let Some(conflict_message) = assignment.field.unique else {
            continue;
        };
        if assignment.value.is_null() {
            continue;
        }
        let taken = lookup
            .value_taken(
                schema.table,
                assignment.field.column,
                &assignment.value,
                schema.primary_key,
                exclude_id,
            )
            .await?;
        if taken {
            return Err(AppError::already_exists(conflict_message).with_field(assignment.field.key));
        }
    }
    Ok(())
}
