// ABOUTME: Goal-type dispatch turning a profile and a goal submission into a GoalPlan
// ABOUTME: Validates required fields per goal type before any calorie target is produced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal planning
//!
//! [`plan_goal`] is the single entry point used when a user sets a goal. It
//! either returns a complete [`GoalPlan`] or an error; there is no partially
//! planned goal.

use crate::energy::{calculate_bmr, calculate_daily_calories_for_goal, calculate_tdee, parse_goal_date};
use chrono::NaiveDate;
use nutrilog_core::errors::{AppError, AppResult};
pub use nutrilog_core::models::{GoalPlan, GoalSubmission, GoalType, ProfileSnapshot};
use tracing::debug;

/// Error message for weight goals lacking a target
pub const MISSING_GOAL_FIELD: &str = "missing required field for goal_type";

/// Error message when the profile cannot support a projection
pub const MISSING_PROFILE_DATA: &str =
    "Cannot compute goal: profile needs weight, height and age";

/// Plan a goal for the given profile
///
/// `previous_calorie_goal` is the user's stored daily goal, used by
/// `maintain` when no TDEE can be computed. `today` becomes the goal's
/// created date.
///
/// # Errors
///
/// - `MissingRequiredField` when `custom_calories` lacks a value, a weight
///   goal lacks a target weight or date, or the profile is missing the data a
///   weight projection needs
/// - `InvalidInput` when custom calories or the target weight is not positive
/// - `ValueOutOfRange` when custom calories do not fit a whole daily target
/// - `InvalidFormat` when the target date is not `YYYY-MM-DD`
pub fn plan_goal(
    profile: &ProfileSnapshot,
    submission: &GoalSubmission,
    previous_calorie_goal: i32,
    today: NaiveDate,
) -> AppResult<GoalPlan> {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let current_weight = profile.weight_kg;

    let (target_weight, target_date, daily_calories) = match submission.goal_type {
        GoalType::CustomCalories => {
            let calories = submission
                .custom_calories
                .ok_or_else(|| AppError::missing_field(MISSING_GOAL_FIELD))?;
            if !calories.is_finite() || calories <= 0.0 {
                return Err(AppError::invalid_input(
                    "custom_calories must be greater than 0",
                ));
            }
            if calories > f64::from(i32::MAX) {
                return Err(AppError::out_of_range(
                    "custom_calories is too large",
                ));
            }
            (current_weight, None, whole_calories(calories))
        }
        GoalType::Maintain => {
            let calories = tdee.map_or(previous_calorie_goal, whole_calories);
            (current_weight, None, calories)
        }
        GoalType::WeightLoss | GoalType::WeightGain => {
            let (Some(target_weight), Some(date_text)) =
                (submission.target_weight, submission.target_date.as_deref())
            else {
                return Err(AppError::missing_field(MISSING_GOAL_FIELD));
            };
            if target_weight <= 0.0 {
                return Err(AppError::invalid_input(
                    "target_weight must be greater than 0",
                ));
            }
            let target_date = parse_goal_date(date_text)?;

            let calories = calculate_daily_calories_for_goal(
                current_weight,
                Some(target_weight),
                Some(target_date),
                tdee,
                Some(today),
            )
            .ok_or_else(|| AppError::missing_field(MISSING_PROFILE_DATA))?;

            (Some(target_weight), Some(target_date), whole_calories(calories))
        }
    };

    debug!(
        goal_type = %submission.goal_type,
        ?bmr,
        ?tdee,
        daily_calories,
        "Planned goal"
    );

    Ok(GoalPlan {
        goal_type: submission.goal_type,
        target_weight,
        target_date,
        goal_created_date: today,
        start_weight: current_weight,
        bmr,
        tdee,
        calculated_daily_calories: daily_calories,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn whole_calories(calories: f64) -> i32 {
    calories.round_ties_even() as i32
}
