// ABOUTME: Goal setting and status business logic
// ABOUTME: Runs the goal planner, persists the plan atomically, and assembles progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::Database;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{GoalPlan, GoalSubmission, GoalType, NewNotification, NotificationKind};
use chrono::NaiveDate;
use nutrilog_intelligence::{calculate_goal_progress, days_remaining, plan_goal, GoalProgress};
use serde::Serialize;
use uuid::Uuid;

/// Current goal with progress, or just `has_goal: false`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalStatus {
    /// Whether the user has set a goal
    pub has_goal: bool,
    /// Goal details when a goal exists
    #[serde(flatten)]
    pub details: Option<GoalStatusDetails>,
}

/// Stored goal snapshot plus derived progress
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalStatusDetails {
    /// Goal kind
    pub goal_type: GoalType,
    /// Target weight (kg)
    pub target_weight: Option<f64>,
    /// Target date
    pub target_date: Option<NaiveDate>,
    /// Day the goal was set
    pub goal_created_date: NaiveDate,
    /// Daily calorie target
    pub daily_calorie_target: i32,
    /// Profile weight (kg)
    pub current_weight: Option<f64>,
    /// Most recent weight log value
    pub latest_logged_weight: Option<f64>,
    /// Day of the most recent weight log
    pub latest_weight_date: Option<NaiveDate>,
    /// BMR at planning time
    pub bmr: Option<f64>,
    /// TDEE at planning time
    pub tdee: Option<f64>,
    /// Days until the target date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    /// Progress toward the target weight
    #[serde(flatten)]
    pub progress: Option<GoalProgress>,
}

/// Compute and store a new goal for the user
///
/// The plan is fully computed before anything is written; persistence is a
/// single transaction.
///
/// # Errors
///
/// Returns validation errors from the planner, `ResourceNotFound` for an
/// unknown user, or a database error
pub async fn set_goal(
    database: &Database,
    user_id: Uuid,
    submission: &GoalSubmission,
    today: NaiveDate,
) -> AppResult<GoalPlan> {
    let user = database.get_user_required(user_id).await?;
    let plan = plan_goal(
        &user.profile_snapshot(),
        submission,
        user.profile.daily_calorie_goal,
        today,
    )
    .map_err(|e| e.with_user_id(user_id))?;

    let notification = NewNotification::new(
        NotificationKind::Goal,
        "Goal updated",
        format!(
            "Your daily calorie target is now {} kcal.",
            plan.calculated_daily_calories
        ),
    )
    .with_action_url("/goals");

    database
        .save_goal_plan(user_id, &plan, &notification)
        .await?;

    AppLogger::log_goal_event(
        &user_id.to_string(),
        plan.goal_type.as_str(),
        plan.calculated_daily_calories,
    );
    Ok(plan)
}

/// Assemble the goal status view
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user or a database error
pub async fn goal_status(
    database: &Database,
    user_id: Uuid,
    today: NaiveDate,
) -> AppResult<GoalStatus> {
    let user = database.get_user_required(user_id).await?;
    let Some(goal) = database.get_goal(user_id).await? else {
        return Ok(GoalStatus {
            has_goal: false,
            details: None,
        });
    };
    let latest = database.get_latest_weight(user_id).await?;

    let progress = if goal.goal_type.is_weight_goal() {
        let start = goal.start_weight.or(user.profile.weight_kg);
        match (start, goal.target_weight, latest.as_ref()) {
            (Some(start), Some(target), Some(log)) => {
                calculate_goal_progress(start, target, log.weight)
            }
            _ => None,
        }
    } else {
        None
    };

    Ok(GoalStatus {
        has_goal: true,
        details: Some(GoalStatusDetails {
            goal_type: goal.goal_type,
            target_weight: goal.target_weight,
            target_date: goal.target_date,
            goal_created_date: goal.goal_created_date,
            daily_calorie_target: goal.calculated_daily_calories,
            current_weight: user.profile.weight_kg,
            latest_logged_weight: latest.as_ref().map(|log| log.weight),
            latest_weight_date: latest.as_ref().map(|log| log.log_date),
            bmr: goal.bmr,
            tdee: goal.tdee,
            days_remaining: goal.target_date.map(|date| days_remaining(date, today)),
            progress,
        }),
    })
}
