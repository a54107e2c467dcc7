// ABOUTME: Meal log route handlers
// ABOUTME: Log a meal, list a day's meals with totals and targets, delete an entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, today};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::meals::{self, MealSubmission};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Day selector for meal listing
#[derive(Debug, Deserialize)]
pub struct MealsQuery {
    /// Day as `YYYY-MM-DD`; defaults to today
    pub date: Option<String>,
}

/// Meal routes implementation
pub struct MealRoutes;

impl MealRoutes {
    /// Create all meal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/meals",
                get(Self::handle_list_meals).post(Self::handle_log_meal),
            )
            .route("/api/meals/:id", delete(Self::handle_delete_meal))
            .with_state(resources)
    }

    /// Handle POST /api/meals
    async fn handle_log_meal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(submission): Json<MealSubmission>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let meal_id = meals::log_meal(&resources.database, auth.user_id, &submission, today()).await?;

        Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Meal logged successfully",
                "meal_id": meal_id,
            })),
        )
            .into_response())
    }

    /// Handle GET /api/meals
    async fn handle_list_meals(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<MealsQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let day = meals::daily_meals(
            &resources.database,
            auth.user_id,
            query.date.as_deref(),
            today(),
        )
        .await?;
        Ok((StatusCode::OK, Json(day)).into_response())
    }

    /// Handle DELETE /api/meals/:id
    async fn handle_delete_meal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let deleted_rows = resources.database.delete_meal(auth.user_id, id).await?;
        debug!(meal_id = id, deleted_rows, "Meal delete");

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "deleted_rows": deleted_rows,
            })),
        )
            .into_response())
    }
}
