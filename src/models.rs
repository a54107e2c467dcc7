// ABOUTME: Core data models for the nutrilog API
// ABOUTME: Re-exports user, goal, weight, meal, food and notification types from nutrilog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Domain types are defined in `nutrilog-core` and shared with the
//! calculators in `nutrilog-intelligence`.

pub use nutrilog_core::models::*;
