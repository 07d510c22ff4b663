// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Entity operations shared by every gym resource route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers parse the request and hand the payload to a service; the
//! service owns validation order, store access and the caller-facing error
//! texts.

/// Schema-driven CRUD over one entity
pub mod resources;

pub use resources::ResourceService;
