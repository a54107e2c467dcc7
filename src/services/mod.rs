// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Goal planning and status, weight tracking, meal logging and food search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers authenticate and decode requests, then call into these
//! functions. Services take the current date as a parameter so that every
//! date-dependent rule can be exercised deterministically in tests.

/// Food search: local cache merged with the external food database
pub mod food_search;

/// Goal setting and goal status assembly
pub mod goals;

/// Meal logging: quantity parsing, nutrient scaling, and daily summaries
pub mod meals;

/// Weight logging and history with projected trajectory
pub mod weight;
