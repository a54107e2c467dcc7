// ABOUTME: User account and profile persistence
// ABOUTME: Registration with uniqueness checks, lookups, and profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Gender, MacroPreset, User, UserProfile};
use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, height_cm, \
     weight_kg, age, gender, activity_level, daily_calorie_goal, macro_preset, carbs_percent, \
     protein_percent, fat_percent, created_at";

impl Database {
    /// Create a new user
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` naming the field when the username or
    /// email is taken, or a database error
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        let existing = sqlx::query("SELECT username, email FROM users WHERE username = ? OR email = ?")
            .bind(&user.username)
            .bind(&user.email)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(row) = existing {
            let username: String = row.get("username");
            let field = if username == user.username {
                "username"
            } else {
                "email"
            };
            return Err(AppError::already_exists(format!("User with this {field} already exists"))
                .with_details(serde_json::json!({ "field": field })));
        }

        let profile = &user.profile;
        sqlx::query(
            r"
            INSERT INTO users (
                id, username, email, password_hash, first_name, last_name, height_cm, weight_kg,
                age, gender, activity_level, daily_calorie_goal, macro_preset, carbs_percent,
                protein_percent, fat_percent, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.age.map(i64::from))
        .bind(profile.gender.as_str())
        .bind(profile.activity_level.map(|level| level.as_str()))
        .bind(profile.daily_calorie_goal)
        .bind(profile.macro_preset.as_str())
        .bind(profile.carbs_percent)
        .bind(profile.protein_percent)
        .bind(profile.fat_percent)
        .bind(user.created_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::already_exists("User already exists")
            }
            _ => AppError::from(e),
        })?;

        Ok(user.id)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Get a user by ID, failing when absent
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist
    pub async fn get_user_required(&self, user_id: Uuid) -> AppResult<User> {
        self.get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(user_id))
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Replace the editable profile fields
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist
    pub async fn update_profile(&self, user_id: Uuid, profile: &UserProfile) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET
                first_name = ?, last_name = ?, height_cm = ?, weight_kg = ?, age = ?, gender = ?,
                activity_level = ?, daily_calorie_goal = ?, macro_preset = ?, carbs_percent = ?,
                protein_percent = ?, fat_percent = ?, updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.age.map(i64::from))
        .bind(profile.gender.as_str())
        .bind(profile.activity_level.map(|level| level.as_str()))
        .bind(profile.daily_calorie_goal)
        .bind(profile.macro_preset.as_str())
        .bind(profile.carbs_percent)
        .bind(profile.protein_percent)
        .bind(profile.fat_percent)
        .bind(Utc::now())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User").with_user_id(user_id));
        }
        Ok(())
    }

    /// Set the profile weight
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_weight(&self, user_id: Uuid, weight_kg: f64) -> AppResult<()> {
        sqlx::query("UPDATE users SET weight_kg = ?, updated_at = ? WHERE id = ?")
            .bind(weight_kg)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Convert a database row to a User struct
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
        let id: String = row.get("id");
        let gender: String = row.get("gender");
        // Unknown stored levels read as no level, which means the moderate multiplier
        let activity_level = row
            .get::<Option<String>, _>("activity_level")
            .and_then(|level| level.parse::<ActivityLevel>().ok());
        let macro_preset = row
            .get::<String, _>("macro_preset")
            .parse::<MacroPreset>()
            .unwrap_or_default();

        Ok(User {
            id: parse_uuid(&id)?,
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            profile: UserProfile {
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                height_cm: row.get("height_cm"),
                weight_kg: row.get("weight_kg"),
                age: row
                    .get::<Option<i64>, _>("age")
                    .and_then(|age| u32::try_from(age).ok()),
                gender: Gender::from_str_lossy(&gender),
                activity_level,
                daily_calorie_goal: row.get("daily_calorie_goal"),
                macro_preset,
                carbs_percent: row.get("carbs_percent"),
                protein_percent: row.get("protein_percent"),
                fat_percent: row.get("fat_percent"),
            },
            created_at: row.get("created_at"),
        })
    }
}
