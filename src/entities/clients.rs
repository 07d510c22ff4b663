// ABOUTME: Client entity schema (table clientes, /api/clients)
// ABOUTME: English payload keys mapped onto Spanish columns, soft delete via estado
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::updates::{Deletion, EntityMessages, EntitySchema, FieldRule, FieldSpec, Listing};

const NON_EMPTY: FieldRule = FieldRule::Text { min_len: 1 };

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "nombre", NON_EMPTY).required(),
    FieldSpec::new("lastname", "apellido", NON_EMPTY).required(),
    FieldSpec::new("birthdate", "fecha_nacimiento", FieldRule::Date)
        .required()
        .create_only(),
    FieldSpec::column("email", FieldRule::Email)
        .required()
        .unique("El cliente ya existe"),
    FieldSpec::new("cell", "telefono", NON_EMPTY).required(),
];

/// Gym members
pub static CLIENTS: EntitySchema = EntitySchema {
    name: "cliente",
    table: "clientes",
    primary_key: "id_cliente",
    fields: FIELDS,
    bool_columns: &["estado"],
    listing: Listing {
        select: "SELECT * FROM clientes",
        qualified_key: "id_cliente",
    },
    deletion: Deletion::Soft { column: "estado" },
    messages: EntityMessages {
        not_found: "Cliente no encontrado",
        delete_not_found: Some("Cliente no encontrado en la base de datos"),
        missing_fields: Some("Faltan datos del cliente"),
        list_failed: "Error al obtener los clientes",
        get_failed: "Error al obtener el cliente",
        create_failed: "Error al crear el cliente",
        update_failed: "Error al actualizar el cliente",
        delete_failed: "Error al eliminar el cliente",
    },
};
