// ABOUTME: Goal progress tracking and projected weight trajectory
// ABOUTME: Compares logged weight to the goal and interpolates the planned path day by day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::round_1dp;
use chrono::{Duration, NaiveDate};
use nutrilog_core::constants::projection::FUTURE_DAYS;
use serde::{Deserialize, Serialize};

/// Progress of a weight goal as of the latest logged weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalProgress {
    /// Share of the required change achieved, in percent (may exceed 100 or be negative)
    pub progress_percentage: f64,
    /// Change since the goal was set (kg)
    pub weight_change: f64,
    /// Change still needed (kg)
    pub weight_remaining: f64,
}

/// One point on the planned weight path
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectedWeight {
    /// Day
    pub date: NaiveDate,
    /// Planned weight (kg), one decimal
    pub weight: f64,
}

/// Progress from `start_weight` toward `target_weight`
///
/// Returns `None` when start and target are equal, since no change is required.
#[must_use]
pub fn calculate_goal_progress(
    start_weight: f64,
    target_weight: f64,
    latest_weight: f64,
) -> Option<GoalProgress> {
    let total_change_needed = target_weight - start_weight;
    if total_change_needed == 0.0 {
        return None;
    }
    let current_change = latest_weight - start_weight;

    Some(GoalProgress {
        progress_percentage: round_1dp(current_change / total_change_needed * 100.0),
        weight_change: round_1dp(current_change),
        weight_remaining: round_1dp(target_weight - latest_weight),
    })
}

/// Linear weight path between goal creation and the target date
///
/// Points cover `max(goal_created, today - history_days)` through
/// `min(target_date, today + 30 days)`, one per day. Empty if the goal spans
/// no days. Window bounds outside the calendar range fall back to the goal's
/// own dates.
#[must_use]
pub fn project_weight_trajectory(
    start_weight: f64,
    target_weight: f64,
    goal_created: NaiveDate,
    target_date: NaiveDate,
    today: NaiveDate,
    history_days: i64,
) -> Vec<ProjectedWeight> {
    let days_total = (target_date - goal_created).num_days();
    if days_total <= 0 {
        return Vec::new();
    }

    let first = Duration::try_days(history_days)
        .and_then(|window| today.checked_sub_signed(window))
        .map_or(goal_created, |since| goal_created.max(since));
    let last = today
        .checked_add_signed(Duration::days(FUTURE_DAYS))
        .map_or(target_date, |horizon| target_date.min(horizon));

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| {
            #[allow(clippy::cast_precision_loss)]
            let ratio = (day - goal_created).num_days() as f64 / days_total as f64;
            ProjectedWeight {
                date: day,
                weight: round_1dp((target_weight - start_weight).mul_add(ratio, start_weight)),
            }
        })
        .collect()
}

/// Whole days from `today` until `target_date` (negative once passed)
#[must_use]
pub fn days_remaining(target_date: NaiveDate, today: NaiveDate) -> i64 {
    (target_date - today).num_days()
}
