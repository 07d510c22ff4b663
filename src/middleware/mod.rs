// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request span creation and CORS layer configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use self::cors::setup_cors;

// Request tracing
pub use self::tracing::{create_request_span, make_request_span, record_response, REQUEST_ID_HEADER};
