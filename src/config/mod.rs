// ABOUTME: Configuration management module for server settings
// ABOUTME: Builds the typed ServerConfig from environment variables once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for nutrilog
//!
//! Configuration is read once in `main`, then passed to every component
//! through `ServerResources`. Nothing reads environment variables after
//! startup.

/// Environment and server configuration
pub mod environment;

pub use environment::{AuthConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig};
