// ABOUTME: Gym API server binary: loads configuration, opens the store and serves HTTP
// ABOUTME: Environment-driven with command-line overrides for port and database URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gym Server Binary
//!
//! Starts the gym management REST API.

use anyhow::Result;
use clap::Parser;
use gym_server::{
    config::{DatabaseUrl, ServerConfig},
    database_plugins::factory::Database,
    logging,
    resources::ServerResources,
    server::GymServer,
};
use std::sync::Arc;
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "gym-server")]
#[command(about = "Gym management REST API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (sqlite:<path>, sqlite::memory:, postgres://...)
    #[arg(long)]
    database_url: Option<String>,

    /// Skip table creation on startup
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url);
    }
    if args.no_migrate {
        config.database.auto_migrate = false;
    }

    info!("Starting Gym API");
    info!("{}", config.summary());

    if let DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    let database = Database::new(
        &config.database.url.to_connection_string(),
        &config.database.pool,
    )
    .await?;
    info!("Database initialized: {}", database.backend_info());

    if config.database.auto_migrate {
        database.migrate().await?;
    }

    let resources = Arc::new(ServerResources::new(Arc::new(database), config));
    let server = GymServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
