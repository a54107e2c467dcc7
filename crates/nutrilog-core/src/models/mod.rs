// ABOUTME: Core data models for the nutrilog nutrition tracking backend
// ABOUTME: Re-exports profile, goal, weight, meal, food and notification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Types shared by the calculators and the server. Enumerations carry
//! `snake_case` wire names and parse from the same text, so the database,
//! JSON bodies and calculators agree on one spelling.

mod food;
mod goal;
mod meal;
mod notification;
mod user;
mod weight;

// Profile domain
pub use user::{ActivityLevel, Gender, MacroPreset, User, UserProfile};

// Goal domain
pub use goal::{GoalPlan, GoalSubmission, GoalType, ProfileSnapshot};

// Weight domain
pub use weight::WeightLog;

// Meal domain
pub use meal::{DailyTotals, MealEntry, NewMeal};

// Food domain
pub use food::{FoodRecord, FoodSource, Portion};

// Notification domain
pub use notification::{NewNotification, Notification, NotificationKind};
