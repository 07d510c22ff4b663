// ABOUTME: Payment entity schema (table pagos, /api/payments)
// ABOUTME: Amount paid by a client for a membership plan
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

const MEMBERSHIP: ForeignKey = ForeignKey {
    table: "membresias",
    key_column: "id_membresia",
    missing_message: "Membresía no existe",
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::column("id_cliente", FieldRule::ForeignKey(CLIENT))
        .required()
        .create_only(),
    FieldSpec::column("id_membresia", FieldRule::ForeignKey(MEMBERSHIP)).required(),
    FieldSpec::column("monto", FieldRule::Number).required(),
];

/// Membership payments
pub static PAYMENTS: EntitySchema = EntitySchema {
    name: "pago",
    table: "pagos",
    primary_key: "id_pago",
    fields: FIELDS,
    bool_columns: &[],
    listing: Listing {
        select: "SELECT p.id_pago, p.fecha_pago, p.monto, \
                 c.id_cliente, c.nombre AS cliente_nombre, c.apellido AS cliente_apellido, \
                 m.id_membresia, m.tipo AS membresia_tipo, m.precio AS membresia_precio \
                 FROM pagos p \
                 JOIN clientes c ON p.id_cliente = c.id_cliente \
                 JOIN membresias m ON p.id_membresia = m.id_membresia",
        qualified_key: "p.id_pago",
    },
    deletion: Deletion::HardWithEnvelope {
        message: "Pago eliminado",
        key: "payment",
    },
    messages: EntityMessages {
        not_found: "Pago no encontrado",
        delete_not_found: None,
        missing_fields: Some("id_cliente, id_membresia y monto son requeridos"),
        list_failed: "Error obteniendo pagos",
        get_failed: "Error obteniendo pago",
        create_failed: "Error creando pago",
        update_failed: "Error actualizando pago",
        delete_failed: "Error eliminando pago",
    },
};
