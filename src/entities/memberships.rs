// ABOUTME: Membership entity schema (table membresias, /api/memberships)
// ABOUTME: Plan type, price and duration in months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::updates::{Deletion, EntityMessages, EntitySchema, FieldRule, FieldSpec, Listing};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::column("tipo", FieldRule::Text { min_len: 1 })
        .required()
        .unique("La membresía ya existe"),
    FieldSpec::column("precio", FieldRule::Number).required(),
    FieldSpec::column("duracion_meses", FieldRule::Integer).required(),
];

/// Membership plans
pub static MEMBERSHIPS: EntitySchema = EntitySchema {
    name: "membresía",
    table: "membresias",
    primary_key: "id_membresia",
    fields: FIELDS,
    bool_columns: &[],
    listing: Listing {
        select: "SELECT * FROM membresias",
        qualified_key: "id_membresia",
    },
    deletion: Deletion::Hard,
    messages: EntityMessages {
        not_found: "Membresía no encontrada",
        delete_not_found: None,
        missing_fields: Some("Faltan datos de la membresía"),
        list_failed: "Error al obtener las membresías",
        get_failed: "Error al obtener la membresía",
        create_failed: "Error al crear la membresía",
        update_failed: "Error al actualizar la membresía",
        delete_failed: "Error al eliminar la membresía",
    },
};
