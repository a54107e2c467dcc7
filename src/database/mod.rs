// ABOUTME: SQLite persistence for accounts, goals, weight logs, meals, foods and notifications
// ABOUTME: Owns the connection pool and applies the versioned schema at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One [`Database`] handle wraps the `SQLite` pool. Table-specific queries
//! live in sibling modules as additional `impl Database` blocks. The schema is
//! a fixed set of versioned migrations under `migrations/`, applied once when
//! the handle is created.

mod foods;
mod goals;
mod meals;
mod notifications;
mod users;
mod weight_logs;

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

const MEMORY_URL: &str = "sqlite::memory:";

/// Database manager for all nutrilog tables
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and apply migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = if database_url == MEMORY_URL {
            // Every in-memory connection is a separate database
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(MEMORY_URL)
                .await?
        } else {
            ensure_parent_dir(database_url).await?;

            // Ensure SQLite creates the database file if it doesn't exist
            let connection_options = if database_url.contains('?') {
                database_url.to_owned()
            } else {
                format!("{database_url}?mode=rwc")
            };
            SqlitePoolOptions::new().connect(&connection_options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Apply pending schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

async fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .trim_start_matches("sqlite:")
        .trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}

pub(crate) fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::database(format!("Invalid user id in database: {e}")))
}
