// ABOUTME: Authentication route handlers for registration, login and the current user
// ABOUTME: Issues HS256 bearer tokens and hashes passwords with Argon2
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Authentication routes
//!
//! Accounts are identified by email for login; usernames and emails are both
//! unique. Successful registration and login both return a bearer token.

use super::authenticate;
use crate::auth::{hash_password, verify_password};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{NewNotification, NotificationKind, User, UserProfile};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// User registration request
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    /// Login name
    #[serde(default)]
    pub username: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Plain-text password
    #[serde(default)]
    pub password: Option<String>,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
}

/// User login request
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Plain-text password
    #[serde(default)]
    pub password: Option<String>,
}

/// Token plus the authenticated user
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token
    pub token: String,
    /// Token lifetime in hours
    pub expires_in_hours: i64,
    /// Authenticated user
    pub user: User,
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/me", get(Self::handle_me))
            .with_state(resources)
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let username = required(request.username.as_deref(), "username")?;
        let email = required(request.email.as_deref(), "email")?;
        let password = required(request.password.as_deref(), "password")?;

        let password_hash = {
            let password = password.to_owned();
            tokio::task::spawn_blocking(move || hash_password(&password))
                .await
                .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??
        };

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash,
            profile: UserProfile {
                first_name: non_empty(request.first_name),
                last_name: non_empty(request.last_name),
                ..UserProfile::default()
            },
            created_at: Utc::now(),
        };

        resources.database.create_user(&user).await?;
        resources
            .database
            .create_notification(
                user.id,
                &NewNotification::new(
                    NotificationKind::Welcome,
                    "Welcome to Nutrilog!",
                    "Set up your profile and a goal to get a personal daily calorie target.",
                )
                .with_action_url("/profile"),
            )
            .await?;

        AppLogger::log_auth_event(&user.id.to_string(), "register", true, None);
        info!(user_id = %user.id, "User registered");

        let response = Self::token_response(&resources, user)?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let email = required(request.email.as_deref(), "email")?;
        let password = required(request.password.as_deref(), "password")?.to_owned();

        let Some(user) = resources.database.get_user_by_email(email).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        let password_hash = user.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| {
                    AppError::internal(format!("Password verification task failed: {e}"))
                })?;

        if !is_valid {
            AppLogger::log_auth_event(&user.id.to_string(), "login", false, Some("bad password"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        AppLogger::log_auth_event(&user.id.to_string(), "login", true, None);
        let response = Self::token_response(&resources, user)?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/auth/me
    async fn handle_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let user = resources.database.get_user_required(auth.user_id).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    fn token_response(resources: &ServerResources, user: User) -> AppResult<LoginResponse> {
        Ok(LoginResponse {
            token: resources.auth_manager.generate_token(&user)?,
            expires_in_hours: resources.auth_manager.token_expiry_hours(),
            user,
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> AppResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AppError::missing_field(format!("{field} is required"))
                .with_details(serde_json::json!({ "field": field }))
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
