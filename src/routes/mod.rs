// ABOUTME: Route module organization for the gym server HTTP endpoints
// ABOUTME: Health check plus the CRUD routes of every gym entity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the gym server
//!
//! Each module contains only route definitions and thin handler functions
//! that delegate to the service layer.

/// CRUD routes for clients, trainers, classes, memberships, inscriptions and payments
pub mod entities;
/// Health check route
pub mod health;

/// Entity route handlers
pub use entities::EntityRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
