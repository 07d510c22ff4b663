// ABOUTME: Core types and constants for the gym management API
// ABOUTME: Foundation crate with error handling and user-facing message constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Gym Core
//!
//! Foundation crate providing shared types for the gym management API.
//! This crate changes rarely, which keeps incremental builds of the server
//! crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: User-facing messages and fixed domain values

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// User-facing messages and fixed domain values
pub mod constants;
