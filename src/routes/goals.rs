// ABOUTME: Goal route handlers: set a goal and read goal status
// ABOUTME: Thin wrappers over the goal service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{authenticate, today};
use crate::errors::AppError;
use crate::models::{GoalPlan, GoalSubmission};
use crate::resources::ServerResources;
use crate::services::goals;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Response for a newly set goal
#[derive(Debug, Serialize)]
pub struct SetGoalResponse {
    /// Always true
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// The stored plan
    pub goal: GoalPlan,
}

/// Goal routes implementation
pub struct GoalRoutes;

impl GoalRoutes {
    /// Create all goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/goals", post(Self::handle_set_goal))
            .route("/api/goals/status", get(Self::handle_status))
            .with_state(resources)
    }

    /// Handle POST /api/goals
    async fn handle_set_goal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(submission): Json<GoalSubmission>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let plan = goals::set_goal(&resources.database, auth.user_id, &submission, today()).await?;

        let response = SetGoalResponse {
            success: true,
            message: format!(
                "Goal set: {} kcal per day",
                plan.calculated_daily_calories
            ),
            goal: plan,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/goals/status
    async fn handle_status(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let status = goals::goal_status(&resources.database, auth.user_id, today()).await?;
        Ok((StatusCode::OK, Json(status)).into_response())
    }
}
