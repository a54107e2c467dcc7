// ABOUTME: Food search and portion route handlers
// ABOUTME: Merged local/external search with pagination and per-food portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::food_search;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search text
    #[serde(default)]
    pub q: String,
    /// Page, starting at 1
    pub p: Option<u32>,
}

/// Food routes implementation
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/foods/search", get(Self::handle_search))
            .route("/api/foods/:food_id/portions", get(Self::handle_portions))
            .with_state(resources)
    }

    /// Handle GET /api/foods/search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let results = food_search::search_foods(
            &resources.database,
            resources.food_client.as_deref(),
            &query.q,
            query.p.unwrap_or(1),
        )
        .await?;
        Ok((StatusCode::OK, Json(results)).into_response())
    }

    /// Handle GET /api/foods/:food_id/portions
    async fn handle_portions(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(food_id): Path<String>,
    ) -> Result<Response, AppError> {
        authenticate(&headers, &resources)?;
        let portions = food_search::food_portions(&resources.database, &food_id).await?;
        Ok((StatusCode::OK, Json(portions)).into_response())
    }
}
