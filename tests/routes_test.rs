// ABOUTME: HTTP-level tests for the Mindful Menu router using tower oneshot requests
// ABOUTME: Covers calorie calculation, menu generation, suggestions, errors and health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::ScriptedProvider;
use mindful_menu::routes;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&body)?))
}

fn app_with(provider: ScriptedProvider) -> Router {
    routes::router(common::resources_with(Arc::new(provider)))
}

#[tokio::test]
async fn test_calculate_calories_success() -> Result<()> {
    let app = routes::router(common::resources_without_key());
    let body = json!({
        "age": 30,
        "gender": "male",
        "height": 175,
        "weight": 70,
        "activity_level": "moderate"
    });

    let (status, value) = send(app, post_json("/calculate_calories", &body.to_string())).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    assert_eq!(value["bmr"], 1648.8);
    assert_eq!(value["tdee"], 2555.6);
    assert_eq!(value["macros"]["protein"], 159.7);
    assert_eq!(value["macros"]["fiber"], 35.8);
    Ok(())
}

#[tokio::test]
async fn test_calculate_calories_bad_input() -> Result<()> {
    let app = routes::router(common::resources_without_key());
    let body = json!({"age": "abc", "gender": "male", "height": 175, "weight": 70, "activity_level": "light"});

    let (status, value) = send(app, post_json("/calculate_calories", &body.to_string())).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_calculate_calories_missing_field() -> Result<()> {
    let app = routes::router(common::resources_without_key());
    let body = json!({"age": 30, "gender": "male", "weight": 70, "activity_level": "light"});

    let (status, value) = send(app, post_json("/calculate_calories", &body.to_string())).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"]["code"], "MISSING_REQUIRED_FIELD");
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_body() -> Result<()> {
    let app = routes::router(common::resources_without_key());

    let (status, value) = send(app, post_json("/calculate_calories", "{not json")).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], false);
    Ok(())
}

#[tokio::test]
async fn test_generate_menu_from_model() -> Result<()> {
    let app = app_with(ScriptedProvider::always(common::fenced_menu_response()));

    let (status, value) = send(
        app,
        post_json("/generate_menu", r#"{"meal_type": "breakfast", "calories": 450}"#),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    assert_eq!(value["source"], "ai");
    assert_eq!(value["menu_items"].as_array().unwrap().len(), 5);
    assert_eq!(value["menu_items"][0]["name"], "Pesarattu");
    Ok(())
}

#[tokio::test]
async fn test_generate_menu_fallback_for_unknown_meal() -> Result<()> {
    let app = app_with(ScriptedProvider::failing());

    let (status, value) = send(
        app,
        post_json("/generate_menu", r#"{"meal_type": "brunch"}"#),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["source"], "fallback");
    // unknown meal types are served as lunch; default target is 300 kcal
    assert_eq!(value["menu_items"][0]["name"], "Andhra Chicken Curry with Rice");
    assert_eq!(value["menu_items"][0]["calories"], 60.0);
    Ok(())
}

#[tokio::test]
async fn test_generate_menu_requires_meal_type() -> Result<()> {
    let app = app_with(ScriptedProvider::failing());

    let (status, value) = send(app, post_json("/generate_menu", r#"{"calories": 300}"#)).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"]["code"], "MISSING_REQUIRED_FIELD");
    Ok(())
}

#[tokio::test]
async fn test_generate_all_menus_defaults_to_2000() -> Result<()> {
    let app = app_with(ScriptedProvider::failing());

    let (status, value) = send(app, post_json("/generate_all_menus", "{}")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    let menus = value["menus"].as_object().unwrap();
    for meal in ["breakfast", "lunch", "snack", "dinner"] {
        assert_eq!(menus[meal].as_array().unwrap().len(), 5, "{meal}");
    }
    // 35% of 2000 split over five dishes
    assert_eq!(value["menus"]["lunch"][0]["calories"], 140.0);
    Ok(())
}

#[tokio::test]
async fn test_generate_all_menus_rejects_negative_total() -> Result<()> {
    let app = app_with(ScriptedProvider::failing());

    let (status, value) = send(
        app,
        post_json("/generate_all_menus", r#"{"total_calories": -50}"#),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_get_suggestions_fallback() -> Result<()> {
    let app = app_with(ScriptedProvider::failing());

    let (status, value) = send(
        app,
        post_json("/get_suggestions", r#"{"calorie_diff": -300, "protein_diff": -15}"#),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["source"], "fallback");
    let text = value["suggestions"].as_str().unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("• Add Andhra snacks"));
    Ok(())
}

#[tokio::test]
async fn test_generation_routes_without_key() -> Result<()> {
    let resources = common::resources_without_key();

    for (uri, body) in [
        ("/generate_menu", r#"{"meal_type": "lunch"}"#),
        ("/generate_all_menus", r#"{"total_calories": 2000}"#),
        ("/get_suggestions", "{}"),
    ] {
        let app = routes::router(resources.clone());
        let (status, value) = send(app, post_json(uri, body)).await?;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "CONFIG_MISSING", "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_health_reports_generation_state() -> Result<()> {
    let request = || Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, value) = send(routes::router(common::resources_without_key()), request()).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["generation"], "unavailable");
    assert_eq!(value["cached_total_calories"], Value::Null);

    let resources = common::resources_with(Arc::new(ScriptedProvider::failing()));
    let app = routes::router(resources.clone());
    send(app, post_json("/generate_all_menus", r#"{"total_calories": 1800}"#)).await?;

    let (_, value) = send(routes::router(resources), request()).await?;
    assert_eq!(value["generation"], "configured");
    assert_eq!(value["cached_total_calories"], 1800);
    Ok(())
}
