// ABOUTME: HTTP middleware configuration
// ABOUTME: CORS layer setup for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-Origin Resource Sharing configuration
pub mod cors;

pub use cors::setup_cors;
