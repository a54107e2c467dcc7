// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, JWT settings and food API settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::external::FoodApiConfig;
use anyhow::{anyhow, Context, Result};
use nutrilog_core::constants::ports::DEFAULT_HTTP_PORT;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/nutrilog.db";
/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default token lifetime
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything without the `sqlite:` prefix is treated as a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str.trim_start_matches("//")),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(DEFAULT_DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: DatabaseUrl,
}

/// Token settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// External food database configuration
    pub food_api: FoodApiConfig,
    /// Comma-separated CORS origins, or `*`
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or
    /// `JWT_SECRET` is missing in production
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Same conditions as [`ServerConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let environment = Environment::from_str_or_default(&var_or("ENVIRONMENT", "development"));

        let http_port = var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(anyhow!("JWT_SECRET must be set in production"));
            }
            None => {
                warn!("JWT_SECRET not set; generated an ephemeral secret, tokens will not survive a restart");
                generate_secret()
            }
        };

        let food_defaults = FoodApiConfig::default();
        let food_api = FoodApiConfig {
            enabled: var_or("FOOD_API_ENABLED", "true")
                .parse()
                .context("Invalid FOOD_API_ENABLED value")?,
            base_url: var_or("FOOD_API_BASE_URL", &food_defaults.base_url),
            timeout_secs: var_or("FOOD_API_TIMEOUT_SECS", &food_defaults.timeout_secs.to_string())
                .parse()
                .context("Invalid FOOD_API_TIMEOUT_SECS value")?,
        };

        let config = Self {
            host: var_or("HOST", DEFAULT_HOST),
            http_port,
            environment,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&var_or("DATABASE_URL", DEFAULT_DATABASE_URL)),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours: var_or(
                    "JWT_EXPIRY_HOURS",
                    &DEFAULT_JWT_EXPIRY_HOURS.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
            },
            food_api,
            cors_allowed_origins: var_or("CORS_ALLOWED_ORIGINS", "*"),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive token lifetime or a zero food API timeout
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_expiry_hours <= 0 {
            return Err(anyhow!("JWT_EXPIRY_HOURS must be positive"));
        }
        if self.food_api.enabled && self.food_api.timeout_secs == 0 {
            return Err(anyhow!("FOOD_API_TIMEOUT_SECS must be positive"));
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrilog Server Configuration:\n\
             - Environment: {}\n\
             - Bind: {}:{}\n\
             - Database: {}\n\
             - JWT expiry: {}h\n\
             - Food API: {}",
            self.environment,
            self.host,
            self.http_port,
            self.database.url,
            self.auth.jwt_expiry_hours,
            if self.food_api.enabled {
                self.food_api.base_url.as_str()
            } else {
                "Disabled"
            },
        )
    }
}

/// Generate a random 256-bit secret, hex encoded
fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.auth.jwt_expiry_hours, 24);
        assert_eq!(config.auth.jwt_secret.len(), 64);
        assert!(config.food_api.enabled);
        assert_eq!(config.food_api.base_url, "https://kaloriabazis.hu");
        assert_eq!(config.database.url.to_connection_string(), "sqlite:./data/nutrilog.db");
    }

    #[test]
    fn test_production_requires_secret() {
        assert!(ServerConfig::from_lookup(lookup(&[("ENVIRONMENT", "production")])).is_err());
        let config = ServerConfig::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(config.auth.jwt_secret, "s3cret");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ServerConfig::from_lookup(lookup(&[("HTTP_PORT", "eighty")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("JWT_EXPIRY_HOURS", "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("FOOD_API_ENABLED", "maybe")])).is_err());
    }

    #[test]
    fn test_database_url_parsing() {
        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./test.db").to_connection_string(),
            "sqlite:./test.db"
        );
        assert_eq!(
            DatabaseUrl::parse_url("./other.db").to_connection_string(),
            "sqlite:./other.db"
        );
    }

    #[test]
    fn test_summary_hides_secret() {
        let config = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "top-secret")])).unwrap();
        assert!(!config.summary().contains("top-secret"));
        assert!(!format!("{config:?}").contains("top-secret"));
    }
}
