// ABOUTME: Energy balance calculations using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE and the daily calorie target that reaches a weight by a date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Calculator
//!
//! Missing inputs are modelled as `None` and propagate: a missing profile
//! field gives no BMR, no BMR gives no TDEE, and no TDEE gives no goal target.
//! Callers must surface that as "more profile data needed" and never
//! substitute a default.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::round_1dp;
use chrono::NaiveDate;
use nutrilog_core::constants::energy::{
    DEFAULT_ACTIVITY_MULTIPLIER, KCAL_PER_KG_BODY_MASS, MAX_DAILY_CALORIES, MIN_DAILY_CALORIES,
    MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
};
use nutrilog_core::errors::{AppError, AppResult};
pub use nutrilog_core::models::{ActivityLevel, Gender};

/// Date format accepted for goal target dates
pub const GOAL_DATE_FORMAT: &str = "%Y-%m-%d";

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = 10 x `weight_kg` + 6.25 x `height_cm` - 5 x age + constant,
/// where the constant is +5 for `Gender::Male` and -161 otherwise.
///
/// Returns `None` if any input is missing or not positive. The result is
/// rounded to one decimal place.
#[must_use]
pub fn calculate_bmr(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    gender: Gender,
) -> Option<f64> {
    let weight = positive(weight_kg)?;
    let height = positive(height_cm)?;
    let age = age.filter(|a| *a > 0)?;

    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female | Gender::Unspecified => MSJ_FEMALE_CONSTANT,
    };

    let bmr = MSJ_WEIGHT_COEF * weight + MSJ_HEIGHT_COEF * height - MSJ_AGE_COEF * f64::from(age)
        + gender_constant;

    Some(round_1dp(bmr))
}

/// Calculate Total Daily Energy Expenditure
///
/// `None` activity level uses the moderate multiplier (1.55). Parse stored
/// text with `str::parse::<ActivityLevel>().ok()` so unrecognized values fall
/// back the same way.
#[must_use]
pub fn calculate_tdee(bmr: Option<f64>, activity_level: Option<ActivityLevel>) -> Option<f64> {
    let bmr = bmr?;
    let multiplier = activity_level.map_or(DEFAULT_ACTIVITY_MULTIPLIER, |level| level.multiplier());
    Some(round_1dp(bmr * multiplier))
}

/// Daily calories needed to move from `current_weight` to `target_weight` by `target_date`
///
/// One kilogram of body mass is treated as 7700 kcal. When the target date is
/// on or before `goal_created_date` (today when `None`) the TDEE is returned
/// unchanged. Otherwise the projected target is clamped to 1200-4000 kcal and
/// rounded to the nearest whole kilocalorie.
#[must_use]
pub fn calculate_daily_calories_for_goal(
    current_weight: Option<f64>,
    target_weight: Option<f64>,
    target_date: Option<NaiveDate>,
    tdee: Option<f64>,
    goal_created_date: Option<NaiveDate>,
) -> Option<f64> {
    let current_weight = positive(current_weight)?;
    let target_weight = positive(target_weight)?;
    let target_date = target_date?;
    let tdee = tdee?;

    let start_date = goal_created_date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let days_to_goal = (target_date - start_date).num_days();
    if days_to_goal <= 0 {
        return Some(tdee);
    }

    let total_calorie_change = (target_weight - current_weight) * KCAL_PER_KG_BODY_MASS;
    #[allow(clippy::cast_precision_loss)]
    let daily_calorie_change = total_calorie_change / days_to_goal as f64;

    let target = (tdee + daily_calorie_change).clamp(MIN_DAILY_CALORIES, MAX_DAILY_CALORIES);
    Some(target.round_ties_even())
}

/// Parse a `YYYY-MM-DD` goal date
///
/// # Errors
///
/// Returns `InvalidFormat` if the text is not a valid calendar date
pub fn parse_goal_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), GOAL_DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{text}', expected YYYY-MM-DD: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_rejects_non_positive_inputs() {
        assert_eq!(calculate_bmr(Some(0.0), Some(175.0), Some(30), Gender::Male), None);
        assert_eq!(calculate_bmr(Some(70.0), Some(-1.0), Some(30), Gender::Male), None);
        assert_eq!(calculate_bmr(Some(70.0), Some(175.0), Some(0), Gender::Male), None);
    }

    #[test]
    fn test_unspecified_gender_uses_non_male_constant() {
        assert_eq!(
            calculate_bmr(Some(70.0), Some(175.0), Some(30), Gender::Unspecified),
            calculate_bmr(Some(70.0), Some(175.0), Some(30), Gender::Female)
        );
    }

    #[test]
    fn test_parse_goal_date() {
        let date = parse_goal_date("2025-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(parse_goal_date("01/03/2025").is_err());
    }
}
