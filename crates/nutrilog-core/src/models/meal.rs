// ABOUTME: Meal log models for food intake tracking
// ABOUTME: MealEntry rows, the insert payload, and per-day nutrient totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged food with nutrients already scaled to the eaten quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Row id
    pub id: i64,
    /// Owner
    pub user_id: Uuid,
    /// Food identifier (cache key or generated `custom_` id)
    pub food_id: String,
    /// Display name
    pub food_name: String,
    /// Meal slot label chosen by the client
    pub meal_type: String,
    /// Eaten quantity (grams)
    pub quantity: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
    /// Fat (g)
    pub fat: f64,
    /// Day the meal was eaten
    pub date_eaten: NaiveDate,
    /// Insert time
    pub logged_at: DateTime<Utc>,
}

/// Values written for a new meal row
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeal {
    /// Food identifier
    pub food_id: String,
    /// Display name
    pub food_name: String,
    /// Meal slot label
    pub meal_type: String,
    /// Eaten quantity (grams)
    pub quantity: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
    /// Fat (g)
    pub fat: f64,
    /// Day eaten
    pub date_eaten: NaiveDate,
}

/// Nutrient totals for a day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
    /// Fat (g)
    pub fat: f64,
}

impl DailyTotals {
    /// Sum nutrients across meal entries
    #[must_use]
    pub fn from_meals(meals: &[MealEntry]) -> Self {
        meals.iter().fold(Self::default(), |acc, meal| Self {
            calories: acc.calories + meal.calories,
            protein: acc.protein + meal.protein,
            carbohydrates: acc.carbohydrates + meal.carbohydrates,
            fat: acc.fat + meal.fat,
        })
    }
}
