// ABOUTME: HTTP integration tests for registration, login, profile and health routes
// ABOUTME: Exercises the full router in-process against an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_no_auth_required() {
    let resources = common::create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/health")
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_checks_database() {
    let resources = common::create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/ready")
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Registration and login
// ============================================================================

async fn register(resources: &std::sync::Arc<nutrilog::resources::ServerResources>) -> Value {
    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({
            "username": "anna",
            "email": "anna@example.com",
            "password": common::TEST_PASSWORD,
            "first_name": "Anna",
        }))
        .send(common::test_router(resources))
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let resources = common::create_test_resources().await.unwrap();

    let body = register(&resources).await;

    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["expires_in_hours"], 24);
    assert_eq!(body["user"]["username"], "anna");
    assert_eq!(body["user"]["first_name"], "Anna");
    assert_eq!(body["user"]["daily_calorie_goal"], 2000);
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_creates_welcome_notification() {
    let resources = common::create_test_resources().await.unwrap();
    let body = register(&resources).await;
    let token = body["token"].as_str().unwrap();

    let response = AxumTestRequest::get("/api/notifications")
        .bearer(token)
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["unread_count"], 1);
    assert_eq!(body["notifications"][0]["type"], "welcome");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let resources = common::create_test_resources().await.unwrap();
    register(&resources).await;

    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({
            "username": "anna2",
            "email": "anna@example.com",
            "password": "another password",
        }))
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
    assert_eq!(body["error"]["details"]["field"], "email");
}

#[tokio::test]
async fn test_register_missing_field() {
    let resources = common::create_test_resources().await.unwrap();

    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "username": "bob", "password": "pw" }))
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["field"], "email");
}

#[tokio::test]
async fn test_login_round_trip_and_me() {
    let resources = common::create_test_resources().await.unwrap();
    register(&resources).await;

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "anna@example.com", "password": common::TEST_PASSWORD }))
        .send(common::test_router(&resources))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::get("/api/auth/me")
        .bearer(&token)
        .send(common::test_router(&resources))
        .await;
    assert_eq!(response.status(), 200);
    let me: Value = response.json();
    assert_eq!(me["email"], "anna@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_is_rejected() {
    let resources = common::create_test_resources().await.unwrap();
    register(&resources).await;

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "anna@example.com", "password": "wrong" }))
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_INVALID");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let resources = common::create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/api/profile")
        .send(common::test_router(&resources))
        .await;
    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::get("/api/profile")
        .bearer("not-a-token")
        .send(common::test_router(&resources))
        .await;
    assert_eq!(response.status(), 401);
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_get_profile_includes_energy_figures() {
    let resources = common::create_test_resources().await.unwrap();
    let (_, token) = common::create_authenticated_user(&resources).await.unwrap();

    let response = AxumTestRequest::get("/api/profile")
        .bearer(&token)
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["bmr"], 1780.0);
    assert_eq!(body["tdee"], 2759.0);
    assert_eq!(body["macro_targets"]["carbs_g"], 200.0);
    assert_eq!(body["macro_targets"]["protein_g"], 150.0);
    assert_eq!(body["macro_targets"]["fat_g"], 67.0);
}

#[tokio::test]
async fn test_update_profile_merges_fields() {
    let resources = common::create_test_resources().await.unwrap();
    let (_, token) = common::create_authenticated_user(&resources).await.unwrap();

    let response = AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&json!({ "age": 40, "activity_level": "sedentary" }))
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["user"]["age"], 40);
    assert_eq!(body["user"]["height_cm"], 180.0);
    assert_eq!(body["user"]["activity_level"], "sedentary");
    // 800 + 1125 - 200 + 5
    assert_eq!(body["bmr"], 1730.0);
    assert_eq!(body["tdee"], 2076.0);
}

#[tokio::test]
async fn test_update_profile_rejects_non_positive_weight() {
    let resources = common::create_test_resources().await.unwrap();
    let (_, token) = common::create_authenticated_user(&resources).await.unwrap();

    let response = AxumTestRequest::put("/api/profile")
        .bearer(&token)
        .json(&json!({ "weight_kg": 0 }))
        .send(common::test_router(&resources))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}
