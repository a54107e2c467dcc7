// ABOUTME: Integration tests for the BMR, TDEE and goal calorie calculators
// ABOUTME: Pins the Mifflin-St Jeor reference values and the 1200-4000 kcal safety band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use chrono::{Duration, NaiveDate};
use nutrilog::errors::ErrorCode;
use nutrilog::models::{ActivityLevel, Gender, GoalSubmission, GoalType, ProfileSnapshot};
use nutrilog_intelligence::{
    calculate_bmr, calculate_daily_calories_for_goal, calculate_tdee, plan_goal,
};

fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn day(n: i64) -> NaiveDate {
    day0() + Duration::days(n)
}

// ============================================================================
// BMR
// ============================================================================

#[test]
fn test_bmr_male_reference_value() {
    assert_eq!(
        calculate_bmr(Some(70.0), Some(175.0), Some(30), Gender::Male),
        Some(1648.8)
    );
}

#[test]
fn test_bmr_female_reference_value() {
    assert_eq!(
        calculate_bmr(Some(70.0), Some(175.0), Some(30), Gender::Female),
        Some(1482.8)
    );
}

#[test]
fn test_bmr_missing_input_is_none() {
    assert_eq!(calculate_bmr(None, Some(175.0), Some(30), Gender::Male), None);
    assert_eq!(calculate_bmr(Some(70.0), None, Some(30), Gender::Male), None);
    assert_eq!(calculate_bmr(Some(70.0), Some(175.0), None, Gender::Male), None);
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_tdee_sedentary_reference_value() {
    assert_eq!(
        calculate_tdee(Some(1648.8), Some(ActivityLevel::Sedentary)),
        Some(1978.6)
    );
}

#[test]
fn test_tdee_missing_level_uses_moderate() {
    assert_eq!(
        calculate_tdee(Some(1648.8), None),
        calculate_tdee(Some(1648.8), Some(ActivityLevel::Moderate))
    );
}

#[test]
fn test_tdee_unknown_stored_level_uses_moderate() {
    let parsed = "couch_potato".parse::<ActivityLevel>().ok();
    assert_eq!(parsed, None);
    assert_eq!(
        calculate_tdee(Some(1500.0), parsed),
        calculate_tdee(Some(1500.0), Some(ActivityLevel::Moderate))
    );
}

#[test]
fn test_tdee_without_bmr_is_none() {
    assert_eq!(calculate_tdee(None, Some(ActivityLevel::Active)), None);
}

// ============================================================================
// Goal calories
// ============================================================================

#[test]
fn test_goal_calories_fifty_day_loss() {
    let calories = calculate_daily_calories_for_goal(
        Some(80.0),
        Some(75.0),
        Some(day(50)),
        Some(2000.0),
        Some(day0()),
    );
    assert_eq!(calories, Some(1230.0));
}

#[test]
fn test_goal_calories_clamped_to_floor() {
    let calories = calculate_daily_calories_for_goal(
        Some(80.0),
        Some(75.0),
        Some(day(5)),
        Some(2000.0),
        Some(day0()),
    );
    assert_eq!(calories, Some(1200.0));
}

#[test]
fn test_goal_calories_clamped_to_ceiling() {
    let calories = calculate_daily_calories_for_goal(
        Some(60.0),
        Some(70.0),
        Some(day(10)),
        Some(2500.0),
        Some(day0()),
    );
    assert_eq!(calories, Some(4000.0));
}

#[test]
fn test_goal_calories_past_or_same_day_returns_tdee() {
    for target in [day0(), day(-7)] {
        let calories = calculate_daily_calories_for_goal(
            Some(80.0),
            Some(75.0),
            Some(target),
            Some(2345.6),
            Some(day0()),
        );
        assert_eq!(calories, Some(2345.6));
    }
}

#[test]
fn test_goal_calories_stay_in_band() {
    for days in [1, 3, 14, 90, 365] {
        for target in [40.0, 70.0, 75.0, 90.0, 140.0] {
            let calories = calculate_daily_calories_for_goal(
                Some(75.0),
                Some(target),
                Some(day(days)),
                Some(2200.0),
                Some(day0()),
            )
            .unwrap();
            assert!((1200.0..=4000.0).contains(&calories), "{calories}");
        }
    }
}

#[test]
fn test_goal_calories_are_deterministic() {
    let run = || {
        calculate_daily_calories_for_goal(
            Some(92.3),
            Some(84.1),
            Some(day(123)),
            Some(2711.4),
            Some(day0()),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn test_goal_calories_missing_tdee_is_none() {
    assert_eq!(
        calculate_daily_calories_for_goal(Some(80.0), Some(75.0), Some(day(50)), None, Some(day0())),
        None
    );
}

// ============================================================================
// Goal dispatch
// ============================================================================

fn profile() -> ProfileSnapshot {
    ProfileSnapshot {
        weight_kg: Some(80.0),
        height_cm: Some(180.0),
        age: Some(30),
        gender: Gender::Male,
        activity_level: Some(ActivityLevel::Moderate),
    }
}

fn submission(goal_type: GoalType) -> GoalSubmission {
    GoalSubmission {
        goal_type,
        target_weight: None,
        target_date: None,
        custom_calories: None,
    }
}

#[test]
fn test_plan_weight_loss_goal() {
    let plan = plan_goal(
        &profile(),
        &GoalSubmission {
            target_weight: Some(75.0),
            target_date: Some("2025-02-20".to_owned()),
            ..submission(GoalType::WeightLoss)
        },
        2000,
        day0(),
    )
    .unwrap();

    // BMR 1780, TDEE 2759, 50 days to lose 5 kg
    assert_eq!(plan.bmr, Some(1780.0));
    assert_eq!(plan.tdee, Some(2759.0));
    assert_eq!(plan.calculated_daily_calories, 1989);
    assert_eq!(plan.start_weight, Some(80.0));
    assert_eq!(plan.goal_created_date, day0());
}

#[test]
fn test_plan_maintain_uses_tdee() {
    let plan = plan_goal(&profile(), &submission(GoalType::Maintain), 2000, day0()).unwrap();
    assert_eq!(plan.calculated_daily_calories, 2759);
    assert_eq!(plan.target_date, None);
}

#[test]
fn test_plan_maintain_without_profile_keeps_previous_goal() {
    let plan = plan_goal(
        &ProfileSnapshot::default(),
        &submission(GoalType::Maintain),
        2100,
        day0(),
    )
    .unwrap();
    assert_eq!(plan.calculated_daily_calories, 2100);
}

#[test]
fn test_plan_custom_calories() {
    let plan = plan_goal(
        &profile(),
        &GoalSubmission {
            custom_calories: Some(1850.0),
            ..submission(GoalType::CustomCalories)
        },
        2000,
        day0(),
    )
    .unwrap();
    assert_eq!(plan.calculated_daily_calories, 1850);
}

#[test]
fn test_plan_weight_goal_requires_target_fields() {
    let err = plan_goal(&profile(), &submission(GoalType::WeightGain), 2000, day0()).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_plan_weight_goal_requires_profile_data() {
    let err = plan_goal(
        &ProfileSnapshot::default(),
        &GoalSubmission {
            target_weight: Some(70.0),
            target_date: Some("2025-03-01".to_owned()),
            ..submission(GoalType::WeightLoss)
        },
        2000,
        day0(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_plan_rejects_bad_target_date() {
    let err = plan_goal(
        &profile(),
        &GoalSubmission {
            target_weight: Some(70.0),
            target_date: Some("01/03/2025".to_owned()),
            ..submission(GoalType::WeightLoss)
        },
        2000,
        day0(),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}
