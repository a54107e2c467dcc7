// ABOUTME: Profile route handlers for body data and macro preferences
// ABOUTME: Returns the profile with derived BMR, TDEE and macro targets; applies partial updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile routes
//!
//! Editing the profile does not recompute an existing goal; the stored goal
//! keeps its calorie target until the next goal is set.

use super::authenticate;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Gender, MacroPreset, User, UserProfile};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use nutrilog_intelligence::{
    calculate_bmr, calculate_macro_targets, calculate_tdee, resolve_distribution,
    MacroDistribution, MacroTargets,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Partial profile update; absent fields keep their stored value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Weight (kg)
    pub weight_kg: Option<f64>,
    /// Age (years)
    pub age: Option<u32>,
    /// `male`, `female`, anything else is unspecified
    pub gender: Option<String>,
    /// Activity level name; unknown names clear the level
    pub activity_level: Option<String>,
    /// Daily calorie goal
    pub daily_calorie_goal: Option<i32>,
    /// Macro preset name
    pub macro_preset: Option<String>,
    /// Custom carbohydrate percentage
    pub carbs_percent: Option<f64>,
    /// Custom protein percentage
    pub protein_percent: Option<f64>,
    /// Custom fat percentage
    pub fat_percent: Option<f64>,
}

/// Profile with derived energy figures
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The stored user
    pub user: User,
    /// Basal metabolic rate, when the profile has enough data
    pub bmr: Option<f64>,
    /// Total daily energy expenditure
    pub tdee: Option<f64>,
    /// Macro targets for the daily calorie goal
    pub macro_targets: MacroTargets,
}

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/profile",
                get(Self::handle_get_profile).put(Self::handle_update_profile),
            )
            .with_state(resources)
    }

    /// Handle GET /api/profile
    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let user = resources.database.get_user_required(auth.user_id).await?;
        Ok((StatusCode::OK, Json(profile_response(user))).into_response())
    }

    /// Handle PUT /api/profile
    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpdateProfileRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let mut user = resources.database.get_user_required(auth.user_id).await?;

        user.profile = apply_update(&user.profile, request)?;
        resources
            .database
            .update_profile(auth.user_id, &user.profile)
            .await?;

        Ok((StatusCode::OK, Json(profile_response(user))).into_response())
    }
}

fn profile_response(user: User) -> ProfileResponse {
    let profile = &user.profile;
    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let macro_targets = calculate_macro_targets(
        f64::from(profile.daily_calorie_goal),
        resolve_distribution(profile.macro_preset, custom_distribution(profile)),
    );

    ProfileResponse {
        user,
        bmr,
        tdee,
        macro_targets,
    }
}

const fn custom_distribution(profile: &UserProfile) -> MacroDistribution {
    MacroDistribution::new(
        profile.carbs_percent,
        profile.protein_percent,
        profile.fat_percent,
    )
}

/// Merge an update onto the current profile and validate the result
///
/// # Errors
///
/// Returns `ValueOutOfRange` for non-positive body data or calorie goal,
/// `InvalidInput` for an unknown macro preset, and the macro validation error
/// when a custom split does not total 100%
pub fn apply_update(current: &UserProfile, request: UpdateProfileRequest) -> AppResult<UserProfile> {
    let mut profile = current.clone();

    if let Some(first_name) = request.first_name {
        profile.first_name = Some(first_name.trim().to_owned()).filter(|n| !n.is_empty());
    }
    if let Some(last_name) = request.last_name {
        profile.last_name = Some(last_name.trim().to_owned()).filter(|n| !n.is_empty());
    }
    if let Some(height) = request.height_cm {
        profile.height_cm = Some(positive(height, "height_cm")?);
    }
    if let Some(weight) = request.weight_kg {
        profile.weight_kg = Some(positive(weight, "weight_kg")?);
    }
    if let Some(age) = request.age {
        if age == 0 {
            return Err(AppError::out_of_range("age must be greater than 0"));
        }
        profile.age = Some(age);
    }
    if let Some(gender) = request.gender {
        profile.gender = Gender::from_str_lossy(&gender);
    }
    if let Some(level) = request.activity_level {
        profile.activity_level = level.parse::<ActivityLevel>().ok();
    }
    if let Some(goal) = request.daily_calorie_goal {
        if goal <= 0 {
            return Err(AppError::out_of_range("daily_calorie_goal must be greater than 0"));
        }
        profile.daily_calorie_goal = goal;
    }
    if let Some(preset) = request.macro_preset {
        profile.macro_preset = preset.parse::<MacroPreset>()?;
    }
    if let Some(carbs) = request.carbs_percent {
        profile.carbs_percent = carbs;
    }
    if let Some(protein) = request.protein_percent {
        profile.protein_percent = protein;
    }
    if let Some(fat) = request.fat_percent {
        profile.fat_percent = fat;
    }

    if profile.macro_preset == MacroPreset::Custom {
        custom_distribution(&profile).validate()?;
    }
    Ok(profile)
}

fn positive(value: f64, field: &str) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(format!("{field} must be greater than 0")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let current = UserProfile {
            height_cm: Some(180.0),
            ..UserProfile::default()
        };
        let updated = apply_update(
            &current,
            UpdateProfileRequest {
                weight_kg: Some(80.0),
                activity_level: Some("very_active".to_owned()),
                ..UpdateProfileRequest::default()
            },
        )
        .unwrap();

        assert_eq!(updated.height_cm, Some(180.0));
        assert_eq!(updated.weight_kg, Some(80.0));
        assert_eq!(updated.activity_level, Some(ActivityLevel::VeryActive));
    }

    #[test]
    fn test_unknown_activity_level_clears_level() {
        let updated = apply_update(
            &UserProfile::default(),
            UpdateProfileRequest {
                activity_level: Some("couch".to_owned()),
                ..UpdateProfileRequest::default()
            },
        )
        .unwrap();
        assert_eq!(updated.activity_level, None);
    }

    #[test]
    fn test_custom_split_must_total_100() {
        let err = apply_update(
            &UserProfile::default(),
            UpdateProfileRequest {
                macro_preset: Some("custom".to_owned()),
                carbs_percent: Some(60.0),
                ..UpdateProfileRequest::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let err = apply_update(
            &UserProfile::default(),
            UpdateProfileRequest {
                weight_kg: Some(-3.0),
                ..UpdateProfileRequest::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
