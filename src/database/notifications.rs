// ABOUTME: Per-user notification persistence
// ABOUTME: Create, list newest first, unread counts and read marking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_uuid, Database};
use crate::errors::AppResult;
use crate::models::{NewNotification, Notification, NotificationKind};
use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

pub(super) const INSERT_NOTIFICATION: &str = r"
    INSERT INTO notifications (user_id, title, message, kind, action_url, created_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

impl Database {
    /// Create a notification for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_notification(
        &self,
        user_id: Uuid,
        notification: &NewNotification,
    ) -> AppResult<i64> {
        let result = sqlx::query(INSERT_NOTIFICATION)
            .bind(user_id.to_string())
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(notification.kind.as_str())
            .bind(&notification.action_url)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Newest notifications first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_notifications(
        &self,
        user_id: Uuid,
        limit: i64,
        unread_only: bool,
    ) -> AppResult<Vec<Notification>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, title, message, kind, is_read, action_url, created_at
            FROM notifications
            WHERE user_id = ? AND (? = 0 OR is_read = 0)
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            ",
        )
        .bind(user_id.to_string())
        .bind(unread_only)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    /// Number of unread notifications
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn unread_notification_count(&self, user_id: Uuid) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = ? AND is_read = 0",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Mark one of the user's notifications as read
    ///
    /// Returns whether a notification was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn mark_notification_read(&self, user_id: Uuid, notification_id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = ? AND user_id = ?")
            .bind(notification_id)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark all of the user's unread notifications as read
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn mark_all_notifications_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = 1 WHERE user_id = ? AND is_read = 0")
                .bind(user_id.to_string())
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    fn row_to_notification(row: &sqlx::sqlite::SqliteRow) -> AppResult<Notification> {
        let user_id: String = row.get("user_id");
        let kind: String = row.get("kind");
        Ok(Notification {
            id: row.get("id"),
            user_id: parse_uuid(&user_id)?,
            title: row.get("title"),
            message: row.get("message"),
            kind: NotificationKind::from_str_lossy(&kind),
            is_read: row.get("is_read"),
            action_url: row.get("action_url"),
            created_at: row.get("created_at"),
        })
    }
}
