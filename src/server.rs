// ABOUTME: HTTP server assembly: router composition, middleware and serving
// ABOUTME: Merges domain routers, adds tracing and CORS layers, binds the listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! [`build_router`] is shared by the binary and the integration tests.

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{
    AuthRoutes, FoodRoutes, GoalRoutes, HealthRoutes, MealRoutes, NotificationRoutes,
    ProfileRoutes, WeightRoutes,
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(GoalRoutes::routes(Arc::clone(&resources)))
        .merge(WeightRoutes::routes(Arc::clone(&resources)))
        .merge(MealRoutes::routes(Arc::clone(&resources)))
        .merge(FoodRoutes::routes(Arc::clone(&resources)))
        .merge(NotificationRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("HTTP server listening on http://{address}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
