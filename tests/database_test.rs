// ABOUTME: Integration tests for the SQLite persistence layer
// ABOUTME: Covers user uniqueness, atomic goal saves, weight upserts and notification state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use chrono::{Duration, NaiveDate, Utc};
use nutrilog::errors::ErrorCode;
use nutrilog::models::{
    GoalPlan, GoalType, NewMeal, NewNotification, NotificationKind, User, UserProfile,
};
use uuid::Uuid;

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap() + Duration::days(n)
}

fn weight_loss_plan() -> GoalPlan {
    GoalPlan {
        goal_type: GoalType::WeightLoss,
        target_weight: Some(75.0),
        target_date: Some(day(50)),
        goal_created_date: day(0),
        start_weight: Some(80.0),
        bmr: Some(1780.0),
        tdee: Some(2759.0),
        calculated_daily_calories: 1989,
    }
}

fn goal_notification() -> NewNotification {
    NewNotification::new(NotificationKind::Goal, "Goal updated", "New target")
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_username() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user_with_profile(&database, UserProfile::default())
        .await
        .unwrap();

    let duplicate = User {
        id: Uuid::new_v4(),
        email: "someone.else@example.com".to_owned(),
        created_at: Utc::now(),
        ..user.clone()
    };
    let err = database.create_user(&duplicate).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.context.details["field"], "username");
}

#[tokio::test]
async fn test_user_round_trip() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user_with_profile(&database, common::complete_profile())
        .await
        .unwrap();

    let stored = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.profile, user.profile);

    let by_email = database.get_user_by_email(&user.email).await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(database.get_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_goal_plan_updates_everything_together() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user_with_profile(&database, common::complete_profile())
        .await
        .unwrap();

    database
        .save_goal_plan(user.id, &weight_loss_plan(), &goal_notification())
        .await
        .unwrap();

    assert_eq!(database.get_goal(user.id).await.unwrap(), Some(weight_loss_plan()));
    let stored = database.get_user_required(user.id).await.unwrap();
    assert_eq!(stored.profile.daily_calorie_goal, 1989);

    let latest = database.get_latest_weight(user.id).await.unwrap().unwrap();
    assert_eq!(latest.weight, 80.0);
    assert_eq!(latest.log_date, day(0));

    assert_eq!(database.unread_notification_count(user.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_save_goal_plan_for_unknown_user_writes_nothing() {
    let database = common::create_test_database().await.unwrap();
    let ghost = Uuid::new_v4();

    let err = database
        .save_goal_plan(ghost, &weight_loss_plan(), &goal_notification())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(database.get_goal(ghost).await.unwrap().is_none());
    assert!(database.get_latest_weight(ghost).await.unwrap().is_none());
}

#[tokio::test]
async fn test_weight_log_is_one_row_per_day() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user_with_profile(&database, UserProfile::default())
        .await
        .unwrap();

    database.log_weight(user.id, 81.0, day(0), None).await.unwrap();
    database
        .log_weight(user.id, 80.4, day(0), Some("after run"))
        .await
        .unwrap();
    database.log_weight(user.id, 80.1, day(1), None).await.unwrap();

    let history = database.get_weight_history(user.id, day(0)).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].weight, 80.4);
    assert_eq!(history[0].notes.as_deref(), Some("after run"));
    assert_eq!(history[1].log_date, day(1));

    let recent = database.get_weight_history(user.id, day(1)).await.unwrap();
    assert_eq!(recent.len(), 1);
}

#[tokio::test]
async fn test_meals_are_scoped_to_user_and_date() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user_with_profile(&database, UserProfile::default())
        .await
        .unwrap();

    let meal = NewMeal {
        food_id: "1003".to_owned(),
        food_name: "banán".to_owned(),
        meal_type: "snack".to_owned(),
        quantity: 120.0,
        calories: 106.8,
        protein: 1.3,
        carbohydrates: 27.4,
        fat: 0.4,
        date_eaten: day(0),
    };
    let id = database.insert_meal(user.id, &meal).await.unwrap();
    database
        .insert_meal(
            user.id,
            &NewMeal {
                date_eaten: day(1),
                ..meal.clone()
            },
        )
        .await
        .unwrap();

    let meals = database.get_meals_for_date(user.id, day(0)).await.unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, id);
    assert_eq!(meals[0].food_name, "banán");

    assert_eq!(database.delete_meal(Uuid::new_v4(), id).await.unwrap(), 0);
    assert_eq!(database.delete_meal(user.id, id).await.unwrap(), 1);
    assert!(database
        .get_meals_for_date(user.id, day(0))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_notifications_listing_and_read_state() {
    let database = common::create_test_database().await.unwrap();
    let user = common::create_test_user_with_profile(&database, UserProfile::default())
        .await
        .unwrap();

    let first = database
        .create_notification(
            user.id,
            &NewNotification::new(NotificationKind::Info, "First", "one"),
        )
        .await
        .unwrap();
    database
        .create_notification(
            user.id,
            &NewNotification::new(NotificationKind::Feature, "Second", "two")
                .with_action_url("/foods"),
        )
        .await
        .unwrap();

    let all = database.list_notifications(user.id, 10, false).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Second");

    assert!(database.mark_notification_read(user.id, first).await.unwrap());
    assert!(!database
        .mark_notification_read(Uuid::new_v4(), first)
        .await
        .unwrap());

    let unread = database.list_notifications(user.id, 10, true).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].action_url.as_deref(), Some("/foods"));

    assert_eq!(database.mark_all_notifications_read(user.id).await.unwrap(), 1);
    assert_eq!(database.unread_notification_count(user.id).await.unwrap(), 0);
}
