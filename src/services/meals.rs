// ABOUTME: Meal logging business logic
// ABOUTME: Quantity parsing, per-100g nutrient scaling, food caching and daily summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::meals::REFERENCE_GRAMS;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::external::normalize_food;
use crate::models::{DailyTotals, FoodRecord, FoodSource, MealEntry, NewMeal};
use chrono::NaiveDate;
use nutrilog_intelligence::{
    calculate_macro_targets, parse_goal_date, resolve_distribution, MacroDistribution,
    MacroTargets,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Meal log request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealSubmission {
    /// Food payload in any shape the food adapter accepts
    #[serde(default)]
    pub food: Option<Value>,
    /// Meal slot label
    #[serde(default)]
    pub meal_type: Option<String>,
    /// Grams eaten, as a number or numeric text
    #[serde(default)]
    pub quantity: Option<Value>,
    /// Day eaten as `YYYY-MM-DD`; anything else means today
    #[serde(default)]
    pub date_eaten: Option<String>,
}

/// Meals, totals and targets for one day
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyMeals {
    /// The day
    pub date: NaiveDate,
    /// Entries, newest first
    pub meals: Vec<MealEntry>,
    /// Summed nutrients
    pub totals: DailyTotals,
    /// User's daily calorie goal
    pub calorie_goal: i32,
    /// Macro targets derived from the calorie goal
    pub macro_targets: MacroTargets,
}

/// Parse a meal quantity in grams
///
/// # Errors
///
/// - `MissingRequiredField` when absent or empty
/// - `InvalidFormat` when not numeric
/// - `InvalidInput` when not greater than zero
pub fn parse_quantity(value: Option<&Value>) -> AppResult<f64> {
    let quantity = match value {
        None | Some(Value::Null) => return Err(AppError::missing_field("Missing quantity")),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(AppError::missing_field("Missing quantity"))
        }
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .filter(|q| q.is_finite())
    .ok_or_else(|| AppError::invalid_format("Invalid quantity format"))?;

    if quantity <= 0.0 {
        return Err(AppError::invalid_input("Quantity must be greater than 0"));
    }
    Ok(quantity)
}

/// Parse `date_eaten`, falling back to today for missing or invalid text
#[must_use]
pub fn resolve_meal_date(date_eaten: Option<&str>, today: NaiveDate) -> NaiveDate {
    match date_eaten.map(str::trim).filter(|d| !d.is_empty()) {
        Some(text) => parse_goal_date(text).unwrap_or_else(|_| {
            debug!(date = %text, "Invalid meal date, using today");
            today
        }),
        None => today,
    }
}

/// Scale a per-100 g food to the eaten quantity
#[must_use]
pub fn scale_food(
    food: &FoodRecord,
    meal_type: &str,
    quantity: f64,
    date_eaten: NaiveDate,
) -> NewMeal {
    let multiplier = quantity / REFERENCE_GRAMS;
    NewMeal {
        food_id: food.food_id.clone(),
        food_name: food.name.clone(),
        meal_type: meal_type.to_owned(),
        quantity,
        calories: food.calories * multiplier,
        protein: food.protein * multiplier,
        carbohydrates: food.carbs * multiplier,
        fat: food.fat * multiplier,
        date_eaten,
    }
}

/// Log a meal and return the new entry id
///
/// Foods that came from the external database are cached locally first.
///
/// # Errors
///
/// Returns validation errors for missing food, meal type or quantity, or a
/// database error
pub async fn log_meal(
    database: &Database,
    user_id: Uuid,
    submission: &MealSubmission,
    today: NaiveDate,
) -> AppResult<i64> {
    let food_value = submission
        .food
        .as_ref()
        .filter(|food| !food.is_null())
        .ok_or_else(|| AppError::missing_field("Missing food data"))?;
    let meal_type = submission
        .meal_type
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::missing_field("Missing meal type"))?;
    let quantity = parse_quantity(submission.quantity.as_ref())?;

    let source = match food_value.get("source").and_then(Value::as_str) {
        Some("api") => FoodSource::Api,
        _ => FoodSource::Local,
    };
    let food = normalize_food(food_value, source)
        .ok_or_else(|| AppError::invalid_input("Food must be a JSON object"))?;

    if source == FoodSource::Api {
        let inserted = database.cache_food(&food, Some(food_value)).await?;
        debug!(food_id = %food.food_id, inserted, "Cached external food");
    }

    let date_eaten = resolve_meal_date(submission.date_eaten.as_deref(), today);
    let meal = scale_food(&food, meal_type, quantity, date_eaten);
    database.insert_meal(user_id, &meal).await
}

/// Meals and targets for a day
///
/// # Errors
///
/// Returns `InvalidFormat` for an unparseable date, `ResourceNotFound` for an
/// unknown user, or a database error
pub async fn daily_meals(
    database: &Database,
    user_id: Uuid,
    date: Option<&str>,
    today: NaiveDate,
) -> AppResult<DailyMeals> {
    let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(text) => parse_goal_date(text)?,
        None => today,
    };

    let user = database.get_user_required(user_id).await?;
    let meals = database.get_meals_for_date(user_id, date).await?;
    let totals = DailyTotals::from_meals(&meals);

    let profile = &user.profile;
    let distribution = resolve_distribution(
        profile.macro_preset,
        MacroDistribution::new(
            profile.carbs_percent,
            profile.protein_percent,
            profile.fat_percent,
        ),
    );

    Ok(DailyMeals {
        date,
        meals,
        totals,
        calorie_goal: profile.daily_calorie_goal,
        macro_targets: calculate_macro_targets(f64::from(profile.daily_calorie_goal), distribution),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_parse_quantity() {
        assert!((parse_quantity(Some(&json!(150))).unwrap() - 150.0).abs() < f64::EPSILON);
        assert!((parse_quantity(Some(&json!(" 80.5 "))).unwrap() - 80.5).abs() < f64::EPSILON);

        let missing = parse_quantity(None).unwrap_err();
        assert_eq!(missing.code, crate::errors::ErrorCode::MissingRequiredField);
        let bad = parse_quantity(Some(&json!("sok"))).unwrap_err();
        assert_eq!(bad.code, crate::errors::ErrorCode::InvalidFormat);
        let zero = parse_quantity(Some(&json!(0))).unwrap_err();
        assert_eq!(zero.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_resolve_meal_date_falls_back_to_today() {
        assert_eq!(resolve_meal_date(Some("2025-03-01"), day()), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(resolve_meal_date(Some("tegnap"), day()), day());
        assert_eq!(resolve_meal_date(None, day()), day());
    }

    #[test]
    fn test_scale_food() {
        let food = normalize_food(
            &json!({"food_id": "1", "name": "zabpehely", "cal": "389", "protein": "16.9", "carbo": "66.3", "fat": "6.9"}),
            FoodSource::Local,
        )
        .unwrap();
        let meal = scale_food(&food, "reggeli", 50.0, day());

        assert!((meal.calories - 194.5).abs() < 1e-9);
        assert!((meal.protein - 8.45).abs() < 1e-9);
        assert_eq!(meal.meal_type, "reggeli");
        assert_eq!(meal.date_eaten, day());
    }
}
