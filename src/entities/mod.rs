// ABOUTME: Field schemas for the six gym entities served by the API
// ABOUTME: Table, column, rule and message tables consumed by the write pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gym entities
//!
//! Each entity is a static [`EntitySchema`](crate::updates::EntitySchema);
//! the services and route handlers are generic over it.

mod classes;
mod clients;
mod inscriptions;
mod memberships;
mod payments;
mod trainers;

pub use classes::CLASSES;
pub use clients::CLIENTS;
pub use inscriptions::INSCRIPTIONS;
pub use memberships::MEMBERSHIPS;
pub use payments::PAYMENTS;
pub use trainers::TRAINERS;

use crate::updates::EntitySchema;

/// Every entity, in dependency order (referenced tables first)
pub static ALL: [&EntitySchema; 6] = [
    &CLIENTS,
    &TRAINERS,
    &MEMBERSHIPS,
    &CLASSES,
    &INSCRIPTIONS,
    &PAYMENTS,
];
