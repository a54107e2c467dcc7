// ABOUTME: Body weight log entry model
// ABOUTME: One entry per user per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logged body weight for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightLog {
    /// Row id
    pub id: i64,
    /// Owner
    pub user_id: Uuid,
    /// Weight (kg)
    pub weight: f64,
    /// Day the weight applies to
    pub log_date: NaiveDate,
    /// Free text
    pub notes: Option<String>,
    /// Insert time
    pub created_at: DateTime<Utc>,
}
