// ABOUTME: Error types re-exported from nutrilog-core for crate-local paths
// ABOUTME: AppError, ErrorCode and the JSON error response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The definitions live in `nutrilog-core`; the `http-response` feature adds
//! the axum `IntoResponse` conversion used by every handler.

pub use nutrilog_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
