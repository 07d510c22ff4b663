// ABOUTME: Table definitions for the six gym entities on every supported backend
// ABOUTME: Used by the store migrate step to bootstrap an empty database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Gym tables, in dependency order.
//!
//! `horario` is kept as `HH:MM` text on `SQLite` and as `TIME` on
//! `PostgreSQL`; both executors hand it back as `HH:MM`.

/// `SQLite` table definitions
pub const SQLITE_SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS clientes (
        id_cliente INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        apellido TEXT NOT NULL,
        fecha_nacimiento DATE NOT NULL,
        email TEXT NOT NULL UNIQUE,
        telefono TEXT NOT NULL,
        estado BOOLEAN NOT NULL DEFAULT 1,
        fecha_registro DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS entrenadores (
        id_entrenador INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        apellido TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        telefono TEXT,
        especialidad TEXT,
        fecha_contratacion DATE,
        estado BOOLEAN NOT NULL DEFAULT 1
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS clases (
        id_clase INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre_clase TEXT NOT NULL,
        descripcion TEXT,
        horario TEXT NOT NULL,
        dia_semana TEXT NOT NULL,
        id_entrenador INTEGER REFERENCES entrenadores(id_entrenador) ON DELETE SET NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS membresias (
        id_membresia INTEGER PRIMARY KEY AUTOINCREMENT,
        tipo TEXT NOT NULL UNIQUE,
        precio REAL NOT NULL,
        duracion_meses INTEGER NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS inscripciones (
        id_inscripcion INTEGER PRIMARY KEY AUTOINCREMENT,
        id_cliente INTEGER NOT NULL REFERENCES clientes(id_cliente) ON DELETE CASCADE,
        id_clase INTEGER NOT NULL REFERENCES clases(id_clase) ON DELETE CASCADE,
        fecha_inscripcion DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS pagos (
        id_pago INTEGER PRIMARY KEY AUTOINCREMENT,
        id_cliente INTEGER NOT NULL REFERENCES clientes(id_cliente) ON DELETE CASCADE,
        id_membresia INTEGER NOT NULL REFERENCES membresias(id_membresia),
        monto REAL NOT NULL,
        fecha_pago DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    ",
];

/// `PostgreSQL` table definitions
#[cfg(feature = "postgresql")]
pub const POSTGRES_SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS clientes (
        id_cliente BIGSERIAL PRIMARY KEY,
        nombre TEXT NOT NULL,
        apellido TEXT NOT NULL,
        fecha_nacimiento DATE NOT NULL,
        email TEXT NOT NULL UNIQUE,
        telefono TEXT NOT NULL,
        estado BOOLEAN NOT NULL DEFAULT TRUE,
        fecha_registro TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS entrenadores (
        id_entrenador BIGSERIAL PRIMARY KEY,
        nombre TEXT NOT NULL,
        apellido TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        telefono TEXT,
        especialidad TEXT,
        fecha_contratacion DATE,
        estado BOOLEAN NOT NULL DEFAULT TRUE
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS clases (
        id_clase BIGSERIAL PRIMARY KEY,
        nombre_clase TEXT NOT NULL,
        descripcion TEXT,
        horario TIME NOT NULL,
        dia_semana TEXT NOT NULL,
        id_entrenador BIGINT REFERENCES entrenadores(id_entrenador) ON DELETE SET NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS membresias (
        id_membresia BIGSERIAL PRIMARY KEY,
        tipo TEXT NOT NULL UNIQUE,
        precio DOUBLE PRECISION NOT NULL,
        duracion_meses BIGINT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS inscripciones (
        id_inscripcion BIGSERIAL PRIMARY KEY,
        id_cliente BIGINT NOT NULL REFERENCES clientes(id_cliente) ON DELETE CASCADE,
        id_clase BIGINT NOT NULL REFERENCES clases(id_clase) ON DELETE CASCADE,
        fecha_inscripcion TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS pagos (
        id_pago BIGSERIAL PRIMARY KEY,
        id_cliente BIGINT NOT NULL REFERENCES clientes(id_cliente) ON DELETE CASCADE,
        id_membresia BIGINT NOT NULL REFERENCES membresias(id_membresia),
        monto DOUBLE PRECISION NOT NULL,
        fecha_pago TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    ",
];
