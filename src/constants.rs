// ABOUTME: Application constants re-exported from nutrilog-core
// ABOUTME: Energy coefficients, defaults, food search and meal constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Named constants live in `nutrilog-core` so the calculators and the server
//! share one definition.

pub use nutrilog_core::constants::*;
