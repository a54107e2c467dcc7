// ABOUTME: Local food cache persistence
// ABOUTME: Name search, insert-if-absent caching of API foods, and stored portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::constants::foods;
use crate::errors::AppResult;
use crate::models::{FoodRecord, FoodSource, Portion};
use chrono::Utc;
use sqlx::Row;
use tracing::warn;

impl Database {
    /// Cached foods whose name contains `query`, ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn search_local_foods(&self, query: &str) -> AppResult<Vec<FoodRecord>> {
        let rows = sqlx::query(
            r"
            SELECT food_id, name, calories, protein, carbs, fat, serving, portions
            FROM food_cache
            WHERE name LIKE ?
            ORDER BY name
            LIMIT ?
            ",
        )
        .bind(format!("%{query}%"))
        .bind(foods::LOCAL_SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_food).collect())
    }

    /// Store a food unless its id is already cached
    ///
    /// Returns whether a row was inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn cache_food(
        &self,
        food: &FoodRecord,
        api_response: Option<&serde_json::Value>,
    ) -> AppResult<bool> {
        let portions = if food.portions.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&food.portions)?)
        };
        let api_response = api_response.map(serde_json::Value::to_string);
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT OR IGNORE INTO food_cache (
                food_id, name, calories, protein, carbs, fat, serving, portions, api_response,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&food.food_id)
        .bind(&food.name)
        .bind(food.calories)
        .bind(food.protein)
        .bind(food.carbs)
        .bind(food.fat)
        .bind(&food.serving)
        .bind(portions)
        .bind(api_response)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Portions stored for a cached food, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_food_portions(&self, food_id: &str) -> AppResult<Option<Vec<Portion>>> {
        let portions: Option<Option<String>> =
            sqlx::query_scalar("SELECT portions FROM food_cache WHERE food_id = ?")
                .bind(food_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(portions
            .flatten()
            .map(|text| parse_portions(food_id, &text))
            .filter(|portions| !portions.is_empty()))
    }

    fn row_to_food(row: &sqlx::sqlite::SqliteRow) -> FoodRecord {
        let food_id: String = row.get("food_id");
        let portions = row
            .get::<Option<String>, _>("portions")
            .map(|text| parse_portions(&food_id, &text))
            .unwrap_or_default();

        FoodRecord {
            name: row.get("name"),
            calories: row.get("calories"),
            protein: row.get("protein"),
            carbs: row.get("carbs"),
            fat: row.get("fat"),
            serving: row.get("serving"),
            portions,
            source: FoodSource::Local,
            food_id,
        }
    }
}

fn parse_portions(food_id: &str, text: &str) -> Vec<Portion> {
    serde_json::from_str(text).unwrap_or_else(|e| {
        warn!(food_id = %food_id, error = %e, "Ignoring malformed cached portions");
        Vec::new()
    })
}
