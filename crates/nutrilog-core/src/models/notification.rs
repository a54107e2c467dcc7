// ABOUTME: In-app notification models
// ABOUTME: Notification rows, their kind, and the insert payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category used by clients to style a notification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// General information
    #[default]
    Info,
    /// New feature announcement
    Feature,
    /// Goal related
    Goal,
    /// Sent once after registration
    Welcome,
}

impl NotificationKind {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Feature => "feature",
            Self::Goal => "goal",
            Self::Welcome => "welcome",
        }
    }

    /// Parse from stored text; unknown kinds read as `Info`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "feature" => Self::Feature,
            "goal" => Self::Goal,
            "welcome" => Self::Welcome,
            _ => Self::Info,
        }
    }
}

/// Stored notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Row id
    pub id: i64,
    /// Recipient
    pub user_id: Uuid,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Category
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Read flag
    pub is_read: bool,
    /// Optional client route
    pub action_url: Option<String>,
    /// Insert time
    pub created_at: DateTime<Utc>,
}

/// Values for a new notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Category
    pub kind: NotificationKind,
    /// Optional client route
    pub action_url: Option<String>,
}

impl NewNotification {
    /// Build a notification without an action link
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            action_url: None,
        }
    }

    /// Attach a client route
    #[must_use]
    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }
}
