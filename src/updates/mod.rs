// ABOUTME: Schema-driven write pipeline shared by every gym resource
// ABOUTME: Field diff, validation, reference checks, statement assembly and the update engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Which payload fields are present
pub mod diff;
/// Partial update engine
pub mod engine;
/// Foreign key and uniqueness lookups
pub mod references;
/// Entity schema types
pub mod schema;
/// Parameterized statement assembly
pub mod statement;
/// Per-field format rules
pub mod validation;

pub use diff::{DiffMode, FieldChange};
pub use engine::{canonicalize, PartialUpdateEngine};
pub use references::{check_references, check_unique, ReferenceLookup};
pub use schema::{
    Deletion, EntityMessages, EntitySchema, FieldRule, FieldSpec, ForeignKey, Listing,
};
pub use statement::Statement;
pub use validation::{validate_changes, validate_field, validate_new, Assignment};
