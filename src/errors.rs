// ABOUTME: Error types for the gym server, re-exported from the gym-core foundation crate
// ABOUTME: AppError, ErrorCode and AppResult shared by every module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `gym-core` so they can be shared without pulling
//! in the server; this module is the crate-local path to them.

pub use gym_core::errors::*;
