// ABOUTME: Declarative entity schemas driving validation and statement assembly
// ABOUTME: Field rules, nullability, create/update eligibility and per-entity messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Entity schema types
//!
//! Field order in [`EntitySchema::fields`] is significant: it is the order in
//! which fields are validated, checked against the store and assigned
//! statement parameters. Column names only ever come from these tables.

/// A foreign key target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Referenced table
    pub table: &'static str,
    /// Referenced primary key column
    pub key_column: &'static str,
    /// Message returned when no row has the given id
    pub missing_message: &'static str,
}

/// Format rule applied to a present, non-null value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// String with at least `min_len` characters once trimmed; stored trimmed
    Text {
        /// Minimum trimmed length in characters
        min_len: usize,
    },
    /// Any string, stored as sent
    FreeText,
    /// `local@domain.tld`, no whitespace
    Email,
    /// `YYYY-MM-DD` calendar date
    Date,
    /// `HH:MM`, 24 hour clock
    TimeOfDay,
    /// One of a fixed, case-sensitive set
    OneOf(&'static [&'static str]),
    /// Finite number (JSON number or numeric string)
    Number,
    /// Integer (JSON integer, integral float, or integer string)
    Integer,
    /// JSON boolean
    Boolean,
    /// Integer id that must exist in another table
    ForeignKey(ForeignKey),
}

/// One field of an entity schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the request payload
    pub key: &'static str,
    /// Column in the table
    pub column: &'static str,
    /// Format rule
    pub rule: FieldRule,
    /// Explicit `null` is accepted and stored
    pub nullable: bool,
    /// Must be present and non-null on create
    pub required: bool,
    /// Accepted on create
    pub creatable: bool,
    /// Accepted on update
    pub updatable: bool,
    /// Conflict message when the value must be unique in the table
    pub unique: Option<&'static str>,
    /// Replaces the rule's default rejection message
    pub invalid_message: Option<&'static str>,
    /// Replaces the default message for a missing or null value
    pub missing_message: Option<&'static str>,
}

impl FieldSpec {
    /// Optional, non-nullable field accepted on create and update
    #[must_use]
    pub const fn new(key: &'static str, column: &'static str, rule: FieldRule) -> Self {
        Self {
            key,
            column,
            rule,
            nullable: false,
            required: false,
            creatable: true,
            updatable: true,
            unique: None,
            invalid_message: None,
            missing_message: None,
        }
    }

    /// Field whose payload key equals its column name
    #[must_use]
    pub const fn column(column: &'static str, rule: FieldRule) -> Self {
        Self::new(column, column, rule)
    }

    /// Accept explicit `null`
    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Require on create
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Only settable when the row is created
    #[must_use]
    pub const fn create_only(self) -> Self {
        Self {
            updatable: false,
            ..self
        }
    }

    /// Only settable on an existing row
    #[must_use]
    pub const fn update_only(self) -> Self {
        Self {
            creatable: false,
            ..self
        }
    }

    /// Value must not collide with another row
    #[must_use]
    pub const fn unique(self, conflict_message: &'static str) -> Self {
        Self {
            unique: Some(conflict_message),
            ..self
        }
    }

    /// Custom rejection message for a malformed value
    #[must_use]
    pub const fn invalid(self, message: &'static str) -> Self {
        Self {
            invalid_message: Some(message),
            ..self
        }
    }

    /// Custom message for a missing or null value
    #[must_use]
    pub const fn missing(self, message: &'static str) -> Self {
        Self {
            missing_message: Some(message),
            ..self
        }
    }

    /// Referenced table, if this is a foreign key
    #[must_use]
    pub const fn foreign_key(&self) -> Option<&ForeignKey> {
        match &self.rule {
            FieldRule::ForeignKey(fk) => Some(fk),
            _ => None,
        }
    }
}

/// What a delete does and what it answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// Row is removed and returned as-is
    Hard,
    /// Row is removed and returned as `{"message": .., "<key>": row}`
    HardWithEnvelope {
        /// Confirmation text
        message: &'static str,
        /// Key holding the deleted row
        key: &'static str,
    },
    /// Boolean column is set to false and the updated row returned
    Soft {
        /// Flag column
        column: &'static str,
    },
}

/// Read queries for list and get
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// `SELECT ... FROM ... [JOIN ...]` without `WHERE` or `ORDER BY`
    pub select: &'static str,
    /// Primary key column as referenced in `select`
    pub qualified_key: &'static str,
}

/// Caller-facing texts for one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMessages {
    /// Returned with 404 when no row matches
    pub not_found: &'static str,
    /// 404 text for delete when it differs from `not_found`
    pub delete_not_found: Option<&'static str>,
    /// Returned with 400 when a required create field is missing
    pub missing_fields: Option<&'static str>,
    /// 500 text for list
    pub list_failed: &'static str,
    /// 500 text for get
    pub get_failed: &'static str,
    /// 500 text for create
    pub create_failed: &'static str,
    /// 500 text for update
    pub update_failed: &'static str,
    /// 500 text for delete
    pub delete_failed: &'static str,
}

/// Everything needed to serve one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    /// Singular name for logs
    pub name: &'static str,
    /// Table name
    pub table: &'static str,
    /// Primary key column
    pub primary_key: &'static str,
    /// Fields in validation and parameter order
    pub fields: &'static [FieldSpec],
    /// Columns returned as JSON booleans
    pub bool_columns: &'static [&'static str],
    /// Read queries
    pub listing: Listing,
    /// Delete behaviour
    pub deletion: Deletion,
    /// Caller-facing texts
    pub messages: EntityMessages,
}

impl EntitySchema {
    /// Look up a field by payload key
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// `SELECT` for every row, ordered by primary key
    #[must_use]
    pub fn list_sql(&self) -> String {
        format!(
            "{} ORDER BY {}",
            self.listing.select.trim(),
            self.listing.qualified_key
        )
    }

    /// `SELECT` for one row by primary key (`$1`)
    #[must_use]
    pub fn get_sql(&self) -> String {
        format!(
            "{} WHERE {} = $1",
            self.listing.select.trim(),
            self.listing.qualified_key
        )
    }
}
