// ABOUTME: Class entity schema (table clases, /api/classes)
// ABOUTME: Weekly slot with HH:MM start, weekday name and optional trainer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{MIN_CLASS_NAME_LEN, VALID_DAYS};
use crate::updates::{
    Deletion, EntityMessages, EntitySchema, FieldRule, FieldSpec, ForeignKey, Listing,
};

const TRAINER: ForeignKey = ForeignKey {
    table: "entrenadores",
    key_column: "id_entrenador",
    missing_message: "Entrenador especificado no existe",
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::column(
        "nombre_clase",
        FieldRule::Text {
            min_len: MIN_CLASS_NAME_LEN,
        },
    )
    .required()
    .missing("nombre_clase es obligatorio y debe tener al menos 2 caracteres"),
    FieldSpec::column("descripcion", FieldRule::FreeText).nullable(),
    FieldSpec::column("horario", FieldRule::TimeOfDay)
        .required()
        .missing("horario es obligatorio y debe tener formato HH:MM"),
    FieldSpec::column("dia_semana", FieldRule::OneOf(VALID_DAYS))
        .required()
        .missing(
            "dia_semana inválido. Valores válidos: Lunes, Martes, Miércoles, Miercoles, \
             Jueves, Viernes, Sábado, Sabado, Domingo",
        ),
    FieldSpec::column("id_entrenador", FieldRule::ForeignKey(TRAINER)).nullable(),
];

/// Scheduled group sessions
pub static CLASSES: EntitySchema = EntitySchema {
    name: "clase",
    table: "clases",
    primary_key: "id_clase",
    fields: FIELDS,
    bool_columns: &[],
    listing: Listing {
        select: "SELECT c.*, e.nombre AS entrenador_nombre, e.apellido AS entrenador_apellido \
                 FROM clases c \
                 LEFT JOIN entrenadores e ON c.id_entrenador = e.id_entrenador",
        qualified_key: "c.id_clase",
    },
    deletion: Deletion::HardWithEnvelope {
        message: "Clase eliminada correctamente",
        key: "clase",
    },
    messages: EntityMessages {
        not_found: "Clase no encontrada",
        delete_not_found: None,
        missing_fields: None,
        list_failed: "Error obteniendo clases",
        get_failed: "Error obteniendo clase",
        create_failed: "Error creando clase",
        update_failed: "Error actualizando clase",
        delete_failed: "Error eliminando clase",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_day_message_lists_every_day() {
        let field = CLASSES.field("dia_semana").unwrap();
        let expected = format!("dia_semana inválido. Valores válidos: {}", VALID_DAYS.join(", "));
        assert_eq!(field.missing_message, Some(expected.as_str()));
    }
}
