// ABOUTME: Weight log route handlers
// ABOUTME: Record a daily weight and read history with the projected goal path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, today};
use crate::constants::defaults::WEIGHT_HISTORY_DAYS;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::weight;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Weight entry request
#[derive(Debug, Deserialize)]
pub struct LogWeightRequest {
    /// Weight (kg)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Day as `YYYY-MM-DD`; defaults to today
    #[serde(default)]
    pub date: Option<String>,
    /// Free text
    #[serde(default)]
    pub notes: Option<String>,
}

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Window size in days
    pub days: Option<i64>,
}

/// Weight routes implementation
pub struct WeightRoutes;

impl WeightRoutes {
    /// Create all weight routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/weight", post(Self::handle_log_weight))
            .route("/api/weight/history", get(Self::handle_history))
            .with_state(resources)
    }

    /// Handle POST /api/weight
    async fn handle_log_weight(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<LogWeightRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let weight = request
            .weight
            .ok_or_else(|| AppError::missing_field("Weight is required"))?;

        let log = weight::record_weight(
            &resources.database,
            auth.user_id,
            weight,
            request.date.as_deref(),
            request.notes.as_deref(),
            today(),
        )
        .await?;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Weight logged successfully",
                "entry": log,
            })),
        )
            .into_response())
    }

    /// Handle GET /api/weight/history
    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<HistoryQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let history = weight::weight_history(
            &resources.database,
            auth.user_id,
            query.days.unwrap_or(WEIGHT_HISTORY_DAYS),
            today(),
        )
        .await?;
        Ok((StatusCode::OK, Json(history)).into_response())
    }
}
