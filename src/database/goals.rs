// ABOUTME: Goal persistence: the single current goal per user
// ABOUTME: Saves a computed plan atomically together with its side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::notifications::INSERT_NOTIFICATION;
use super::weight_logs::UPSERT_WEIGHT_LOG;
use super::Database;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{GoalPlan, GoalType, NewNotification};
use chrono::Utc;
use sqlx::Row;
use std::time::Instant;
use uuid::Uuid;

impl Database {
    /// Persist a goal plan in one transaction
    ///
    /// Replaces the current goal row, sets the user's daily calorie goal,
    /// records the starting weight for weight goals, and stores the
    /// notification. Either all of it is written or none of it.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails; the transaction is rolled back
    pub async fn save_goal_plan(
        &self,
        user_id: Uuid,
        plan: &GoalPlan,
        notification: &NewNotification,
    ) -> AppResult<()> {
        let started = Instant::now();
        let user_key = user_id.to_string();
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE users SET daily_calorie_goal = ?, updated_at = ? WHERE id = ?")
            .bind(plan.calculated_daily_calories)
            .bind(now)
            .bind(&user_key)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::not_found("User").with_user_id(user_id));
        }

        sqlx::query(
            r"
            INSERT INTO goals (
                user_id, goal_type, target_weight, target_date, goal_created_date, start_weight,
                bmr, tdee, calculated_daily_calories, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                goal_type = excluded.goal_type,
                target_weight = excluded.target_weight,
                target_date = excluded.target_date,
                goal_created_date = excluded.goal_created_date,
                start_weight = excluded.start_weight,
                bmr = excluded.bmr,
                tdee = excluded.tdee,
                calculated_daily_calories = excluded.calculated_daily_calories,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&user_key)
        .bind(plan.goal_type.as_str())
        .bind(plan.target_weight)
        .bind(plan.target_date)
        .bind(plan.goal_created_date)
        .bind(plan.start_weight)
        .bind(plan.bmr)
        .bind(plan.tdee)
        .bind(plan.calculated_daily_calories)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if plan.goal_type.is_weight_goal() {
            if let Some(start_weight) = plan.start_weight {
                sqlx::query(UPSERT_WEIGHT_LOG)
                    .bind(&user_key)
                    .bind(start_weight)
                    .bind(plan.goal_created_date)
                    .bind("Goal start weight")
                    .bind(now)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        sqlx::query(INSERT_NOTIFICATION)
            .bind(&user_key)
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(notification.kind.as_str())
            .bind(&notification.action_url)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        AppLogger::log_database_operation(
            "save_goal_plan",
            "goals",
            true,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(())
    }

    /// Get the user's current goal
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored goal type is unknown
    pub async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<GoalPlan>> {
        let row = sqlx::query(
            r"
            SELECT goal_type, target_weight, target_date, goal_created_date, start_weight,
                   bmr, tdee, calculated_daily_calories
            FROM goals WHERE user_id = ?
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::row_to_goal(&r)).transpose()
    }

    fn row_to_goal(row: &sqlx::sqlite::SqliteRow) -> AppResult<GoalPlan> {
        let goal_type: String = row.get("goal_type");
        Ok(GoalPlan {
            goal_type: goal_type.parse::<GoalType>()?,
            target_weight: row.get("target_weight"),
            target_date: row.get("target_date"),
            goal_created_date: row.get("goal_created_date"),
            start_weight: row.get("start_weight"),
            bmr: row.get("bmr"),
            tdee: row.get("tdee"),
            calculated_daily_calories: row.get("calculated_daily_calories"),
        })
    }
}
