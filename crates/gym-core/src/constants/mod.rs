// ABOUTME: Caller-facing message texts and value sets shared across the gym API
// ABOUTME: Keeps the exact strings clients match on in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Message texts are part of the HTTP contract: clients match on them, so
//! they are kept byte-for-byte stable.

/// Generic request-level messages
pub mod messages {
    /// Body of the fallback 404 for unknown routes
    pub const ROUTE_NOT_FOUND: &str = "Route not found";

    /// Path id is not a positive integer
    pub const INVALID_ID: &str = "ID inválido";

    /// Partial update with no recognised field
    pub const NO_FIELDS_TO_UPDATE: &str = "No hay campos para actualizar";

    /// Request body is not a JSON object
    pub const INVALID_BODY: &str = "El cuerpo de la petición debe ser un objeto JSON";
}

/// Accepted weekday names for `dia_semana`
///
/// Accented and unaccented spellings are both accepted and stored as sent.
pub const VALID_DAYS: &[&str] = &[
    "Lunes",
    "Martes",
    "Miércoles",
    "Miercoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Sabado",
    "Domingo",
];

/// Minimum number of characters in a class name
pub const MIN_CLASS_NAME_LEN: usize = 2;

/// Service name used in health responses and log fields
pub const SERVICE_NAME: &str = "gym-server";
