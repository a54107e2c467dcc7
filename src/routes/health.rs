// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides liveness and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::endpoints;
use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::HEALTH_CHECK, get(Self::handle_health))
            .route(endpoints::READY_CHECK, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Ready once the database answers
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> impl IntoResponse {
        let database_ok = sqlx::query("SELECT 1")
            .execute(resources.database.pool())
            .await
            .is_ok();

        let (status, label) = if database_ok {
            (StatusCode::OK, "ready")
        } else {
            warn!("Readiness check failed: database unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
        };

        (
            status,
            Json(serde_json::json!({
                "status": label,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
