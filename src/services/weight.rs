// ABOUTME: Weight logging and weight history business logic
// ABOUTME: Validates entries, keeps the profile weight current, and projects goal trajectories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{GoalPlan, WeightLog};
use chrono::{Duration, NaiveDate};
use nutrilog_core::constants::defaults::MAX_WEIGHT_HISTORY_DAYS;
use nutrilog_intelligence::{parse_goal_date, project_weight_trajectory, ProjectedWeight};
use serde::Serialize;
use uuid::Uuid;

/// Weight logs with the goal and its projected path
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeightHistory {
    /// Logged weights, oldest first
    pub weight_logs: Vec<WeightLog>,
    /// Current goal, if any
    pub goal_data: Option<GoalPlan>,
    /// Expected weight per day for weight goals
    pub projected_progress: Vec<ProjectedWeight>,
}

/// Record a weight entry
///
/// Entries for today also update the profile weight.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive weight, `InvalidFormat` for an
/// unparseable date, or a database error
pub async fn record_weight(
    database: &Database,
    user_id: Uuid,
    weight: f64,
    date: Option<&str>,
    notes: Option<&str>,
    today: NaiveDate,
) -> AppResult<WeightLog> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::invalid_input("Weight must be greater than 0"));
    }

    let log_date = match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(text) => parse_goal_date(text)?,
        None => today,
    };

    let log = database.log_weight(user_id, weight, log_date, notes).await?;
    if log_date == today {
        database.update_weight(user_id, weight).await?;
    }
    Ok(log)
}

/// Weight logs from the last `days` days plus the goal projection
///
/// # Errors
///
/// Returns `InvalidInput` for a negative window, `ValueOutOfRange` for a
/// window longer than [`MAX_WEIGHT_HISTORY_DAYS`], or a database error
pub async fn weight_history(
    database: &Database,
    user_id: Uuid,
    days: i64,
    today: NaiveDate,
) -> AppResult<WeightHistory> {
    if days < 0 {
        return Err(AppError::invalid_input("days must not be negative"));
    }

    if days > MAX_WEIGHT_HISTORY_DAYS {
        return Err(AppError::out_of_range(format!(
            "days must be at most {MAX_WEIGHT_HISTORY_DAYS}"
        )));
    }

    let since = Duration::try_days(days)
        .and_then(|window| today.checked_sub_signed(window))
        .ok_or_else(|| AppError::out_of_range("days reaches before the earliest date"))?;
    let weight_logs = database.get_weight_history(user_id, since).await?;
    let goal = database.get_goal(user_id).await?;

    let projected_progress = match goal.as_ref() {
        Some(plan) if plan.goal_type.is_weight_goal() => {
            let start = match plan.start_weight {
                Some(weight) => Some(weight),
                None => database.get_user_required(user_id).await?.profile.weight_kg,
            };
            match (start, plan.target_weight, plan.target_date) {
                (Some(start), Some(target), Some(target_date)) => project_weight_trajectory(
                    start,
                    target,
                    plan.goal_created_date,
                    target_date,
                    today,
                    days,
                ),
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    };

    Ok(WeightHistory {
        weight_logs,
        goal_data: goal,
        projected_progress,
    })
}
