// ABOUTME: Inscription entity schema (table inscripciones, /api/inscriptions)
// ABOUTME: Links a client to a class; only the class can change afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::updates::{
    Deletion, EntityMessages, EntitySchema, FieldRule, FieldSpec, ForeignKey, Listing,
};

const CLIENT: ForeignKey = ForeignKey {
    table: "clientes",
    key_column: "id_cliente",
    missing_message: "Cliente no existe",
};

const CLASS: ForeignKey = ForeignKey {
    table: "clases",
    key_column: "id_clase",
    missing_message: "Clase no existe",
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::column("id_cliente", FieldRule::ForeignKey(CLIENT))
        .required()
        .create_only(),
    FieldSpec::column("id_clase", FieldRule::ForeignKey(CLASS))
        .required()
        .missing("id_clase es requerido"),
];

/// Client enrolments in classes
pub static INSCRIPTIONS: EntitySchema = EntitySchema {
    name: "inscripción",
    table: "inscripciones",
    primary_key: "id_inscripcion",
    fields: FIELDS,
    bool_columns: &[],
    listing: Listing {
        select: "SELECT i.id_inscripcion, i.fecha_inscripcion, \
                 c.id_cliente, c.nombre AS cliente_nombre, c.apellido AS cliente_apellido, \
                 cl.id_clase, cl.nombre_clase \
                 FROM inscripciones i \
                 JOIN clientes c ON i.id_cliente = c.id_cliente \
                 JOIN clases cl ON i.id_clase = cl.id_clase",
        qualified_key: "i.id_inscripcion",
    },
    deletion: Deletion::HardWithEnvelope {
        message: "Inscripción eliminada",
        key: "inscription",
    },
    messages: EntityMessages {
        not_found: "Inscripción no encontrada",
        delete_not_found: None,
        missing_fields: Some("id_cliente e id_clase son requeridos"),
        list_failed: "Error obteniendo inscripciones",
        get_failed: "Error obteniendo inscripción",
        create_failed: "Error creando inscripción",
        update_failed: "Error actualizando inscripción",
        delete_failed: "Error eliminando inscripción",
    },
};
