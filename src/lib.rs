// ABOUTME: Main library entry point for the gym management REST API
// ABOUTME: Clients, trainers, classes, memberships, inscriptions and payments over axum and sqlx
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gym Server
//!
//! CRUD endpoints over six related gym entities with field validation and
//! cross-entity reference checks.
//!
//! ## Architecture
//!
//! - **Entities**: static field schemas, one per table
//! - **Updates**: the schema-driven write pipeline (diff, validation,
//!   reference checks, statement assembly and the partial update engine)
//! - **Services**: list, get, create, update and delete over any entity
//! - **Routes**: thin axum handlers delegating to services
//! - **Database plugins**: `SQLite` and `PostgreSQL` executors behind one trait
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gym_server::config::ServerConfig;
//! use gym_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Gym server configured: {}", config.summary());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Caller-facing messages and shared value sets
pub use gym_core::constants;

/// Store executors and backend selection
pub mod database_plugins;

/// Gym entity schemas
pub mod entities;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Entity services
pub mod services;

/// Schema-driven write pipeline
pub mod updates;
