// ABOUTME: Meal log persistence
// ABOUTME: Insert, per-day listing and owner-scoped deletion of meal entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_uuid, Database};
use crate::errors::AppResult;
use crate::models::{MealEntry, NewMeal};
use chrono::{NaiveDate, Utc};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Insert a meal entry and return its row id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_meal(&self, user_id: Uuid, meal: &NewMeal) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO meal_log (
                user_id, food_id, food_name, meal_type, quantity, calories, protein,
                carbohydrates, fat, date_eaten, logged_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(user_id.to_string())
        .bind(&meal.food_id)
        .bind(&meal.food_name)
        .bind(&meal.meal_type)
        .bind(meal.quantity)
        .bind(meal.calories)
        .bind(meal.protein)
        .bind(meal.carbohydrates)
        .bind(meal.fat)
        .bind(meal.date_eaten)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Meals eaten on `date`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_meals_for_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<MealEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, food_id, food_name, meal_type, quantity, calories, protein,
                   carbohydrates, fat, date_eaten, logged_at
            FROM meal_log
            WHERE user_id = ? AND date_eaten = ?
            ORDER BY logged_at DESC, id DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_meal).collect()
    }

    /// Delete one of the user's meals, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_meal(&self, user_id: Uuid, meal_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM meal_log WHERE id = ? AND user_id = ?")
            .bind(meal_id)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    fn row_to_meal(row: &sqlx::sqlite::SqliteRow) -> AppResult<MealEntry> {
        let user_id: String = row.get("user_id");
        Ok(MealEntry {
            id: row.get("id"),
            user_id: parse_uuid(&user_id)?,
            food_id: row.get("food_id"),
            food_name: row.get("food_name"),
            meal_type: row.get("meal_type"),
            quantity: row.get("quantity"),
            calories: row.get("calories"),
            protein: row.get("protein"),
            carbohydrates: row.get("carbohydrates"),
            fat: row.get("fat"),
            date_eaten: row.get("date_eaten"),
            logged_at: row.get("logged_at"),
        })
    }
}
