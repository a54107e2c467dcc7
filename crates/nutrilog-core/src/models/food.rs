// ABOUTME: Normalized food record shared by the local cache and the external search
// ABOUTME: FoodRecord, FoodSource and Portion definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Where a food record came from
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FoodSource {
    /// Local food cache
    #[default]
    Local,
    /// External food database
    Api,
}

/// A named serving size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portion {
    /// Label shown to the user
    pub name: String,
    /// Weight in grams
    pub grams: f64,
}

/// Food with nutrients per 100 g
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Stable identifier
    pub food_id: String,
    /// Display name
    pub name: String,
    /// Energy (kcal per 100 g)
    pub calories: f64,
    /// Protein (g per 100 g)
    pub protein: f64,
    /// Carbohydrates (g per 100 g)
    pub carbs: f64,
    /// Fat (g per 100 g)
    pub fat: f64,
    /// Serving label
    pub serving: String,
    /// Known portions
    #[serde(default)]
    pub portions: Vec<Portion>,
    /// Origin
    #[serde(default)]
    pub source: FoodSource,
}
