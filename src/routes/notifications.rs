// ABOUTME: Notification route handlers
// ABOUTME: List with unread count, mark one read, mark all read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::authenticate;
use crate::constants::defaults::NOTIFICATION_LIMIT;
use crate::errors::AppError;
use crate::models::Notification;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Listing query parameters
#[derive(Debug, Deserialize)]
pub struct NotificationsQuery {
    /// Maximum entries to return
    pub limit: Option<i64>,
    /// Only unread entries
    #[serde(default)]
    pub unread_only: bool,
}

/// Listing response
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    /// Newest first
    pub notifications: Vec<Notification>,
    /// Unread total regardless of limit
    pub unread_count: i64,
}

/// Notification routes implementation
pub struct NotificationRoutes;

impl NotificationRoutes {
    /// Create all notification routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/notifications", get(Self::handle_list))
            .route("/api/notifications/read_all", post(Self::handle_mark_all_read))
            .route("/api/notifications/:id/read", post(Self::handle_mark_read))
            .with_state(resources)
    }

    /// Handle GET /api/notifications
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<NotificationsQuery>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let limit = query.limit.unwrap_or(NOTIFICATION_LIMIT);
        if limit <= 0 {
            return Err(AppError::invalid_input("limit must be greater than 0"));
        }

        let notifications = resources
            .database
            .list_notifications(auth.user_id, limit, query.unread_only)
            .await?;
        let unread_count = resources
            .database
            .unread_notification_count(auth.user_id)
            .await?;

        let response = NotificationsResponse {
            notifications,
            unread_count,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/notifications/:id/read
    async fn handle_mark_read(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let updated = resources
            .database
            .mark_notification_read(auth.user_id, id)
            .await?;

        if !updated {
            return Err(AppError::not_found(format!("Notification {id}")));
        }
        Ok((StatusCode::OK, Json(serde_json::json!({ "success": true }))).into_response())
    }

    /// Handle POST /api/notifications/read_all
    async fn handle_mark_all_read(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let updated = resources
            .database
            .mark_all_notifications_read(auth.user_id)
            .await?;
        Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "updated": updated })),
        )
            .into_response())
    }
}
