// ABOUTME: Nutrilog HTTP server binary
// ABOUTME: Loads configuration, initializes logging and the database, then serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrilog API Server Binary
//!
//! Starts the nutrition tracking API with token authentication and a
//! migrated `SQLite` database.

use anyhow::Result;
use clap::Parser;
use nutrilog::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutrilog-server")]
#[command(about = "Nutrilog - nutrition tracking API with BMR/TDEE based calorie goals")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/nutrilog.db`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }

    logging::init_from_env()?;

    info!("Starting Nutrilog API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database.url);

    let resources = Arc::new(ServerResources::from_config(database, config)?);
    display_available_endpoints(&resources.config.host, resources.config.http_port);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET    http://{host}:{port}/health");
    info!("   Register:          POST   http://{host}:{port}/api/auth/register");
    info!("   Login:             POST   http://{host}:{port}/api/auth/login");
    info!("   Profile:           GET/PUT http://{host}:{port}/api/profile");
    info!("   Set Goal:          POST   http://{host}:{port}/api/goals");
    info!("   Goal Status:       GET    http://{host}:{port}/api/goals/status");
    info!("   Log Weight:        POST   http://{host}:{port}/api/weight");
    info!("   Weight History:    GET    http://{host}:{port}/api/weight/history");
    info!("   Meals:             GET/POST http://{host}:{port}/api/meals");
    info!("   Food Search:       GET    http://{host}:{port}/api/foods/search?q=");
    info!("   Notifications:     GET    http://{host}:{port}/api/notifications");
    info!("=== End of Endpoint List ===");
}
