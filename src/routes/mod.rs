// ABOUTME: Route module organization for nutrilog HTTP endpoints
// ABOUTME: Domain route groups plus the shared bearer-token authentication helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the nutrilog API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Registration, login and current-user routes
pub mod auth;
/// Food search and portion routes
pub mod foods;
/// Goal setting and goal status routes
pub mod goals;
/// Health check and readiness routes
pub mod health;
/// Meal logging routes
pub mod meals;
/// Notification routes
pub mod notifications;
/// Profile routes
pub mod profile;
/// Weight log routes
pub mod weight;

pub use auth::AuthRoutes;
pub use foods::FoodRoutes;
pub use goals::GoalRoutes;
pub use health::HealthRoutes;
pub use meals::MealRoutes;
pub use notifications::NotificationRoutes;
pub use profile::ProfileRoutes;
pub use weight::WeightRoutes;

use crate::auth::AuthResult;
use crate::errors::AppResult;
use crate::resources::ServerResources;
use axum::http::HeaderMap;
use chrono::NaiveDate;

/// Authenticate a request from its `Authorization: Bearer` header
pub(crate) fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<AuthResult> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());
    resources.auth_manager.authenticate_request(auth_header)
}

/// Today's date in server local time
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
