// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Shares the database, token manager, food client and configuration across handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Built once at startup and handed to every router as axum state.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;
use crate::external::{FoodApiClient, KaloriaBazisClient};
use std::sync::Arc;
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence
    pub database: Arc<Database>,
    /// Token issuing and validation
    pub auth_manager: Arc<AuthManager>,
    /// External food search; `None` when disabled
    pub food_client: Option<Arc<dyn FoodApiClient>>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources with an explicit food client
    #[must_use]
    pub fn new(
        database: Database,
        config: ServerConfig,
        food_client: Option<Arc<dyn FoodApiClient>>,
    ) -> Self {
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_hours,
        );

        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            food_client,
            config: Arc::new(config),
        }
    }

    /// Create resources with the HTTP food client when it is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(database: Database, config: ServerConfig) -> AppResult<Self> {
        let food_client: Option<Arc<dyn FoodApiClient>> = if config.food_api.enabled {
            info!(base_url = %config.food_api.base_url, "External food search enabled");
            Some(Arc::new(KaloriaBazisClient::new(config.food_api.clone())?))
        } else {
            info!("External food search disabled");
            None
        };

        Ok(Self::new(database, config, food_client))
    }
}
