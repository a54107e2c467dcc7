// ABOUTME: Energy balance constants for BMR, TDEE and goal calorie calculations
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers and daily calorie bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy balance constants
//!
//! Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//! energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! DOI: 10.1093/ajcn/51.2.241

/// Mifflin-St Jeor weight coefficient (per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (per year)
pub const MSJ_AGE_COEF: f64 = 5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor constant for everyone else
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Sedentary (little/no exercise)
pub const ACTIVITY_SEDENTARY: f64 = 1.2;
/// Lightly active (1-3 days/week)
pub const ACTIVITY_LIGHT: f64 = 1.375;
/// Moderately active (3-5 days/week)
pub const ACTIVITY_MODERATE: f64 = 1.55;
/// Active (6-7 days/week)
pub const ACTIVITY_ACTIVE: f64 = 1.725;
/// Very active (hard training 2x/day)
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;
/// Multiplier used when the activity level is missing or unrecognized
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = ACTIVITY_MODERATE;

/// Approximate energy content of one kilogram of body mass (kcal)
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Lower bound for a projected daily calorie target (kcal)
pub const MIN_DAILY_CALORIES: f64 = 1200.0;
/// Upper bound for a projected daily calorie target (kcal)
pub const MAX_DAILY_CALORIES: f64 = 4000.0;
