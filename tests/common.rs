// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, server resources, and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutrilog`

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use nutrilog::{
    auth::hash_password,
    config::environment::{
        AuthConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig,
    },
    database::Database,
    external::{FoodApiClient, FoodApiConfig, MockFoodApiClient},
    models::{ActivityLevel, Gender, User, UserProfile},
    resources::ServerResources,
    server::build_router,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Password used for every test account
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration for in-process tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        auth: AuthConfig {
            jwt_secret: "test-secret-for-integration-tests".to_owned(),
            jwt_expiry_hours: 24,
        },
        food_api: FoodApiConfig {
            enabled: false,
            ..FoodApiConfig::default()
        },
        cors_allowed_origins: "*".to_owned(),
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Resources backed by an in-memory database and the mock food client
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_client(Some(Arc::new(MockFoodApiClient::new()))).await
}

/// Resources with an explicit food client
pub async fn create_test_resources_with_client(
    food_client: Option<Arc<dyn FoodApiClient>>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        test_config(),
        food_client,
    )))
}

/// Full application router
pub fn test_router(resources: &Arc<ServerResources>) -> axum::Router {
    build_router(resources.clone())
}

/// Profile with enough data for BMR and TDEE
pub fn complete_profile() -> UserProfile {
    UserProfile {
        first_name: Some("Test".to_owned()),
        height_cm: Some(180.0),
        weight_kg: Some(80.0),
        age: Some(30),
        gender: Gender::Male,
        activity_level: Some(ActivityLevel::Moderate),
        ..UserProfile::default()
    }
}

/// Create a user with the given profile
pub async fn create_test_user_with_profile(
    database: &Database,
    profile: UserProfile,
) -> Result<User> {
    let id = Uuid::new_v4();
    let short = &id.simple().to_string()[..8];
    let user = User {
        id,
        username: format!("user_{short}"),
        email: format!("user_{short}@example.com"),
        password_hash: hash_password(TEST_PASSWORD)?,
        profile,
        created_at: Utc::now(),
    };
    database.create_user(&user).await?;
    Ok(user)
}

/// Create a user with a complete profile and return it with a bearer token
pub async fn create_authenticated_user(resources: &ServerResources) -> Result<(User, String)> {
    let user = create_test_user_with_profile(&resources.database, complete_profile()).await?;
    let token = resources.auth_manager.generate_token(&user)?;
    Ok((user, token))
}

/// Local date used by request handlers
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `today + days` as `YYYY-MM-DD`
pub fn date_in(days: i64) -> String {
    (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
}
