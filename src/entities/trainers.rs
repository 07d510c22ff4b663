// ABOUTME: Trainer entity schema (table entrenadores, /api/trainers)
// ABOUTME: Contact details optional, active flag settable only on update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::updates::{Deletion, EntityMessages, EntitySchema, FieldRule, FieldSpec, Listing};

const NON_EMPTY: FieldRule = FieldRule::Text { min_len: 1 };

const FIELDS: &[FieldSpec] = &[
    FieldSpec::column("nombre", NON_EMPTY).required(),
    FieldSpec::column("apellido", NON_EMPTY).required(),
    FieldSpec::column("email", FieldRule::Email)
        .required()
        .unique("El entrenador ya existe"),
    FieldSpec::column("telefono", FieldRule::FreeText).nullable(),
    FieldSpec::column("especialidad", FieldRule::FreeText).nullable(),
    FieldSpec::column("fecha_contratacion", FieldRule::Date).nullable(),
    FieldSpec::column("estado", FieldRule::Boolean).update_only(),
];

/// Staff who lead classes
pub static TRAINERS: EntitySchema = EntitySchema {
    name: "entrenador",
    table: "entrenadores",
    primary_key: "id_entrenador",
    fields: FIELDS,
    bool_columns: &["estado"],
    listing: Listing {
        select: "SELECT * FROM entrenadores",
        qualified_key: "id_entrenador",
    },
    deletion: Deletion::HardWithEnvelope {
        message: "Entrenador eliminado correctamente",
        key: "entrenador",
    },
    messages: EntityMessages {
        not_found: "Entrenador no encontrado",
        delete_not_found: None,
        missing_fields: Some("Datos del entrenador inválidos"),
        list_failed: "Error obteniendo entrenadores",
        get_failed: "Error obteniendo entrenador",
        create_failed: "Error creando entrenador",
        update_failed: "Error actualizando entrenador",
        delete_failed: "Error eliminando entrenador",
    },
};
