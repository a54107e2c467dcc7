// ABOUTME: Core types and constants for the nutrilog nutrition tracking backend
// ABOUTME: Foundation crate with error handling, domain models, and named constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog Core
//!
//! Foundation crate providing shared types and constants for the nutrilog
//! backend. The calculators and the server both depend on it, and it changes
//! rarely, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy, macro, meal and pagination constants
//! - **models**: Profile, goal, meal, food and notification types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models shared between the calculators and the server
pub mod models;
