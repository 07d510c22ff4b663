// ABOUTME: Resolves which schema fields a request payload explicitly supplies
// ABOUTME: Produces the field diff in schema order, treating explicit null as present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::schema::{EntitySchema, FieldSpec};
use serde_json::{Map, Value};

/// Which operation the diff is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    /// New row: only creatable fields count
    Create,
    /// Existing row: only updatable fields count
    Update,
}

impl DiffMode {
    const fn accepts(self, field: &FieldSpec) -> bool {
        match self {
            Self::Create => field.creatable,
            Self::Update => field.updatable,
        }
    }
}

/// One supplied field and its raw value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldChange<'a> {
    /// Schema entry
    pub field: &'static FieldSpec,
    /// Value exactly as sent, possibly `null`
    pub value: &'a Value,
}

/// Present fields of `payload`, in schema order
///
/// Keys outside the schema, and fields the mode does not accept, are
/// ignored. A key mapped to `null` is present.
#[must_use]
pub fn resolve<'a>(
    schema: &EntitySchema,
    payload: &'a Map<String, Value>,
    mode: DiffMode,
) -> Vec<FieldChange<'a>> {
    schema
        .fields
        .iter()
        .filter(|field| mode.accepts(field))
        .filter_map(|field| payload.get(field.key).map(|value| FieldChange { field, value }))
        .collect()
}
