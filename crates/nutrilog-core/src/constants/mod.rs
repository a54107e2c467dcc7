// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy balance, macro, meal, food lookup and network constants for nutrilog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being kept in a single
//! flat namespace. Energy constants live in their own file because the
//! calculators and their tests import them directly.

/// Energy balance constants (Mifflin-St Jeor, activity multipliers, calorie bounds)
pub mod energy;

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// API base path
    pub const API_BASE: &str = "/api";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Profile defaults applied to new accounts
pub mod defaults {
    /// Daily calorie goal before any goal has been set
    pub const DAILY_CALORIE_GOAL: i32 = 2000;
    /// Default carbohydrate share of calories (percent)
    pub const CARBS_PERCENT: f64 = 40.0;
    /// Default protein share of calories (percent)
    pub const PROTEIN_PERCENT: f64 = 30.0;
    /// Default fat share of calories (percent)
    pub const FAT_PERCENT: f64 = 30.0;
    /// Default weight history window (days)
    pub const WEIGHT_HISTORY_DAYS: i64 = 30;
    /// Longest weight history window accepted (days)
    pub const MAX_WEIGHT_HISTORY_DAYS: i64 = 3650;
    /// Default number of notifications returned
    pub const NOTIFICATION_LIMIT: i64 = 10;
}

/// Macronutrient energy density
pub mod macros {
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// kcal per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Allowed deviation from 100 when validating custom percentages
    pub const PERCENT_TOTAL_TOLERANCE: f64 = 1.0;
}

/// Meal logging limits
pub mod meals {
    /// Nutrient values are stored per this many grams
    pub const REFERENCE_GRAMS: f64 = 100.0;
    /// Upper clamp for any normalized nutrient value
    pub const MAX_NUTRIENT_VALUE: f64 = 10_000.0;
    /// Prefix for generated ids of foods without one
    pub const CUSTOM_FOOD_PREFIX: &str = "custom_";
    /// Hex characters of the name digest used in generated ids
    pub const CUSTOM_FOOD_ID_HEX_LEN: usize = 8;
}

/// Food search and portions
pub mod foods {
    /// Results per search page
    pub const PAGE_SIZE: usize = 8;
    /// Maximum rows returned from the local food cache
    pub const LOCAL_SEARCH_LIMIT: i64 = 20;
    /// Default serving label
    pub const DEFAULT_SERVING: &str = "100g";
    /// Small portion (grams)
    pub const PORTION_SMALL_GRAMS: f64 = 80.0;
    /// Medium portion (grams)
    pub const PORTION_MEDIUM_GRAMS: f64 = 150.0;
    /// Large portion (grams)
    pub const PORTION_LARGE_GRAMS: f64 = 220.0;
    /// Bodies shorter than this from the external search are treated as empty
    pub const MIN_RESPONSE_BODY_LEN: usize = 50;
    /// Marker the external search returns instead of results
    pub const NO_RESULTS_MARKER: &str = "die_with_text";
}

/// Weight trajectory projection
pub mod projection {
    /// How far past today the projected trajectory extends (days)
    pub const FUTURE_DAYS: i64 = 30;
}
