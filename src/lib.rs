// ABOUTME: Main library entry point for the nutrilog nutrition tracking API
// ABOUTME: Wires persistence, authentication, food search and HTTP routes around the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog
//!
//! A nutrition tracking backend. Users keep a body profile, set a weight or
//! calorie goal, log meals and weights, and search a food database. Daily
//! calorie targets come from the Mifflin-St Jeor BMR, an activity multiplier,
//! and a linear energy-balance projection toward the target weight
//! (see `nutrilog-intelligence`).
//!
//! ## Architecture
//!
//! - **routes**: thin axum handlers, one router per domain
//! - **services**: business rules shared by handlers
//! - **database**: `SQLite` persistence via sqlx with versioned migrations
//! - **external**: the external food database client and payload adapter
//! - **auth**: HS256 bearer tokens and Argon2 password hashing
//! - **config**: environment based configuration injected via [`resources::ServerResources`]

/// Bearer token and password handling
pub mod auth;
/// Environment configuration
pub mod config;
/// Named constants
pub mod constants;
/// `SQLite` persistence
pub mod database;
/// Unified error types
pub mod errors;
/// External food database client
pub mod external;
/// Logging setup and structured event helpers
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// Domain models
pub mod models;
/// Shared server resources
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// Router assembly and serving
pub mod server;
/// Business logic
pub mod services;
