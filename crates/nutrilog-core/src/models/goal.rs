// ABOUTME: Goal models for calorie planning
// ABOUTME: GoalType dispatch key, the submitted goal request and the computed GoalPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::user::{ActivityLevel, Gender};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of goal a user pursues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Lose weight by a target date
    WeightLoss,
    /// Gain weight by a target date
    WeightGain,
    /// Hold current weight
    Maintain,
    /// Fixed calorie target chosen by the user
    CustomCalories,
}

impl GoalType {
    /// Whether this goal tracks a target weight over time
    #[must_use]
    pub const fn is_weight_goal(&self) -> bool {
        matches!(self, Self::WeightLoss | Self::WeightGain)
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::Maintain => "maintain",
            Self::CustomCalories => "custom_calories",
        }
    }
}

impl FromStr for GoalType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight_loss" => Ok(Self::WeightLoss),
            "weight_gain" => Ok(Self::WeightGain),
            "maintain" => Ok(Self::Maintain),
            "custom_calories" => Ok(Self::CustomCalories),
            other => Err(AppError::invalid_input(format!("Unknown goal type: {other}"))),
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile fields consumed by the energy calculator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfileSnapshot {
    /// Current weight (kg)
    pub weight_kg: Option<f64>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Age (years)
    pub age: Option<u32>,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
}

/// Goal request as submitted by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSubmission {
    /// Goal kind
    pub goal_type: GoalType,
    /// Desired weight (kg), required for weight goals
    #[serde(default)]
    pub target_weight: Option<f64>,
    /// Target date as `YYYY-MM-DD`, required for weight goals
    #[serde(default)]
    pub target_date: Option<String>,
    /// Daily calories, required for `custom_calories`
    #[serde(default)]
    pub custom_calories: Option<f64>,
}

/// Fully computed goal ready to be persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalPlan {
    /// Goal kind
    pub goal_type: GoalType,
    /// Target weight (kg); equals current weight for non-weight goals
    pub target_weight: Option<f64>,
    /// Target date; only set for weight goals
    pub target_date: Option<NaiveDate>,
    /// Day the goal was set
    pub goal_created_date: NaiveDate,
    /// Weight when the goal was set
    pub start_weight: Option<f64>,
    /// BMR at planning time
    pub bmr: Option<f64>,
    /// TDEE at planning time
    pub tdee: Option<f64>,
    /// Daily calorie target
    pub calculated_daily_calories: i32,
}
