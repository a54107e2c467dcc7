// ABOUTME: External API client modules (kaloriabazis.hu food search)
// ABOUTME: Provides the food search seam, its HTTP client, and the response adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for external APIs used by the nutrilog server.

pub mod food_api;

// Re-export commonly used types
pub use food_api::{
    custom_food_id, normalize_food, parse_nutrient, FoodApiClient, FoodApiConfig,
    KaloriaBazisClient, MockFoodApiClient,
};
