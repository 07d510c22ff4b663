// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the injected store handle and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database_plugins::QueryExecutor;

/// Dependencies shared by all handlers
///
/// There is no process-wide store; handlers reach it only through this value.
#[derive(Clone)]
pub struct ServerResources {
    /// Parameterized query execution
    pub store: Arc<dyn QueryExecutor>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle a store and a configuration
    #[must_use]
    pub fn new(store: Arc<dyn QueryExecutor>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
