// ABOUTME: User account and body profile models
// ABOUTME: Gender, ActivityLevel and MacroPreset enums plus the stored User record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{
    ACTIVITY_ACTIVE, ACTIVITY_LIGHT, ACTIVITY_MODERATE, ACTIVITY_SEDENTARY, ACTIVITY_VERY_ACTIVE,
};
use crate::errors::AppError;
use crate::models::goal::ProfileSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Gender used to pick the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male coefficient set
    Male,
    /// Female coefficient set
    Female,
    /// Not provided; uses the non-male coefficient set
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse gender from text, treating anything unrecognized as unspecified
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Unspecified,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Habitual activity level used for TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => ACTIVITY_SEDENTARY,
            Self::Light => ACTIVITY_LIGHT,
            Self::Moderate => ACTIVITY_MODERATE,
            Self::Active => ACTIVITY_ACTIVE,
            Self::VeryActive => ACTIVITY_VERY_ACTIVE,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: {other}"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macronutrient split preset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MacroPreset {
    /// 40% carbs / 30% protein / 30% fat
    #[default]
    Balanced,
    /// 20 / 40 / 40
    LowCarb,
    /// 30 / 40 / 30
    HighProtein,
    /// 5 / 25 / 70
    Keto,
    /// 45 / 20 / 35
    Mediterranean,
    /// User supplied percentages
    Custom,
}

impl MacroPreset {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
            Self::Keto => "keto",
            Self::Mediterranean => "mediterranean",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for MacroPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "balanced" => Ok(Self::Balanced),
            "low_carb" => Ok(Self::LowCarb),
            "high_protein" => Ok(Self::HighProtein),
            "keto" => Ok(Self::Keto),
            "mediterranean" => Ok(Self::Mediterranean),
            "custom" => Ok(Self::Custom),
            other => Err(AppError::invalid_input(format!(
                "Unknown macro preset: {other}"
            ))),
        }
    }
}

/// Stored user account including credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Login name, unique
    pub username: String,
    /// Email address, unique
    pub email: String,
    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Body and preference fields
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Inputs the energy calculator needs from this profile
    #[must_use]
    pub const fn profile_snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            weight_kg: self.profile.weight_kg,
            height_cm: self.profile.height_cm,
            age: self.profile.age,
            gender: self.profile.gender,
            activity_level: self.profile.activity_level,
        }
    }
}

/// Editable profile fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Current body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender for BMR
    #[serde(default)]
    pub gender: Gender,
    /// Activity level for TDEE; `None` means the moderate multiplier
    pub activity_level: Option<ActivityLevel>,
    /// Daily calorie target shown to the user
    pub daily_calorie_goal: i32,
    /// Macro split preset
    #[serde(default)]
    pub macro_preset: MacroPreset,
    /// Custom carbohydrate percentage
    pub carbs_percent: f64,
    /// Custom protein percentage
    pub protein_percent: f64,
    /// Custom fat percentage
    pub fat_percent: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        use crate::constants::defaults;
        Self {
            first_name: None,
            last_name: None,
            height_cm: None,
            weight_kg: None,
            age: None,
            gender: Gender::Unspecified,
            activity_level: Some(ActivityLevel::Moderate),
            daily_calorie_goal: defaults::DAILY_CALORIE_GOAL,
            macro_preset: MacroPreset::Balanced,
            carbs_percent: defaults::CARBS_PERCENT,
            protein_percent: defaults::PROTEIN_PERCENT,
            fat_percent: defaults::FAT_PERCENT,
        }
    }
}
