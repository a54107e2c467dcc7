// ABOUTME: Weight log persistence, one entry per user and day
// ABOUTME: Upsert, history since a date, and latest entry lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::WeightLog;
use chrono::{NaiveDate, Utc};
use sqlx::Row;
use uuid::Uuid;

/// Later entries for the same day replace earlier ones
pub(super) const UPSERT_WEIGHT_LOG: &str = r"
    INSERT INTO weight_logs (user_id, weight, log_date, notes, created_at)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT(user_id, log_date) DO UPDATE SET
        weight = excluded.weight,
        notes = excluded.notes,
        created_at = excluded.created_at
";

impl Database {
    /// Record the weight for a day, replacing any entry for that day
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn log_weight(
        &self,
        user_id: Uuid,
        weight: f64,
        log_date: NaiveDate,
        notes: Option<&str>,
    ) -> AppResult<WeightLog> {
        sqlx::query(UPSERT_WEIGHT_LOG)
            .bind(user_id.to_string())
            .bind(weight)
            .bind(log_date)
            .bind(notes)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        let row = sqlx::query(
            "SELECT id, user_id, weight, log_date, notes, created_at FROM weight_logs WHERE user_id = ? AND log_date = ?",
        )
        .bind(user_id.to_string())
        .bind(log_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::database("Weight log missing after write"))?;

        Self::row_to_weight_log(&row)
    }

    /// Weight logs on or after `since`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_weight_history(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> AppResult<Vec<WeightLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, weight, log_date, notes, created_at
            FROM weight_logs
            WHERE user_id = ? AND log_date >= ?
            ORDER BY log_date ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_weight_log).collect()
    }

    /// Most recent weight log by date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_latest_weight(&self, user_id: Uuid) -> AppResult<Option<WeightLog>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, weight, log_date, notes, created_at
            FROM weight_logs
            WHERE user_id = ?
            ORDER BY log_date DESC
            LIMIT 1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::row_to_weight_log(&r)).transpose()
    }

    fn row_to_weight_log(row: &sqlx::sqlite::SqliteRow) -> AppResult<WeightLog> {
        let user_id: String = row.get("user_id");
        Ok(WeightLog {
            id: row.get("id"),
            user_id: parse_uuid(&user_id)?,
            weight: row.get("weight"),
            log_date: row.get("log_date"),
            notes: row.get("notes"),
            created_at: row.get("created_at"),
        })
    }
}
