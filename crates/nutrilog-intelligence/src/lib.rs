// ABOUTME: Nutrition intelligence crate with pure calculators for nutrilog
// ABOUTME: BMR/TDEE, goal dispatch, macro targets and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog Intelligence
//!
//! Pure, stateless calculators. Nothing in this crate performs I/O or holds
//! state, so every function can be called concurrently from independent
//! requests and always returns the same output for the same input.

/// BMR, TDEE and goal calorie projection
pub mod energy;

/// Goal-type dispatch producing a complete `GoalPlan`
pub mod goals;

/// Macro presets and gram targets
pub mod macros;

/// Goal progress and projected weight trajectory
pub mod progress;

pub use energy::{
    calculate_bmr, calculate_daily_calories_for_goal, calculate_tdee, parse_goal_date,
};
pub use goals::plan_goal;
pub use macros::{
    calculate_macro_targets, preset_distribution, resolve_distribution, MacroDistribution,
    MacroTargets,
};
pub use progress::{
    calculate_goal_progress, days_remaining, project_weight_trajectory, GoalProgress,
    ProjectedWeight,
};

/// Round to one decimal place, ties to even
#[must_use]
pub(crate) fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
