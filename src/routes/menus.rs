// ABOUTME: Menu and suggestion generation routes backed by the menu generation service
// ABOUTME: Single meal, full day and advice endpoints; CONFIG_MISSING without an API key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Menu generation routes
//!
//! Generation itself never fails: the service substitutes fallback content.
//! Only malformed request bodies and a missing credential produce errors.

use super::json_body;
use crate::constants::meals::{DEFAULT_MEAL_CALORIES, DEFAULT_TOTAL_CALORIES};
use crate::errors::{AppError, AppResult};
use crate::menus::{DailyMenuSet, MealMenu, MealType, MenuSource};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Request body of `POST /generate_menu`
#[derive(Debug, Deserialize)]
pub struct GenerateMenuRequest {
    /// Meal label; unknown labels are served as lunch
    pub meal_type: Option<String>,
    /// Target calories for the meal (default 300)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Cuisine for the prompt (default from configuration)
    #[serde(default)]
    pub cuisine: Option<String>,
}

/// Response body of `POST /generate_menu`
#[derive(Debug, Serialize)]
pub struct GenerateMenuResponse {
    /// Always `true`
    pub success: bool,
    /// Dishes for the meal
    pub menu_items: MealMenu,
    /// `ai` or `fallback`
    pub source: MenuSource,
}

/// Request body of `POST /generate_all_menus`
#[derive(Debug, Deserialize)]
pub struct GenerateAllMenusRequest {
    /// Daily calorie total (default 2000)
    #[serde(default)]
    pub total_calories: Option<f64>,
}

/// Response body of `POST /generate_all_menus`
#[derive(Debug, Serialize)]
pub struct GenerateAllMenusResponse {
    /// Always `true`
    pub success: bool,
    /// Menus keyed by meal type
    pub menus: DailyMenuSet,
}

/// Request body of `POST /get_suggestions`; absent deltas count as zero
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestionsRequest {
    /// Calorie delta (negative means deficit)
    pub calorie_diff: f64,
    /// Protein delta in grams
    pub protein_diff: f64,
    /// Carbohydrate delta in grams
    pub carb_diff: f64,
    /// Fiber delta in grams
    pub fiber_diff: f64,
}

/// Response body of `POST /get_suggestions`
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// Always `true`
    pub success: bool,
    /// Three bullet lines
    pub suggestions: String,
    /// `ai` or `fallback`
    pub source: MenuSource,
}

/// Menu generation routes
pub struct MenuRoutes;

impl MenuRoutes {
    /// Create all generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/generate_menu", post(Self::handle_generate_menu))
            .route("/generate_all_menus", post(Self::handle_generate_all_menus))
            .route("/get_suggestions", post(Self::handle_get_suggestions))
            .with_state(resources)
    }

    async fn handle_generate_menu(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<GenerateMenuResponse>, AppError> {
        let request: GenerateMenuRequest = parse_request(json_body(body)?)?;
        let label = request
            .meal_type
            .ok_or_else(|| AppError::missing_field("meal_type"))?;
        let calories = calorie_target(request.calories, DEFAULT_MEAL_CALORIES, "calories")?;

        let service = resources.menu_service()?;
        let cuisine = request
            .cuisine
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| service.cuisine().to_owned());
        let meal = service
            .generate_meal_for_cuisine(MealType::from_label_or_lunch(&label), calories, &cuisine)
            .await;

        Ok(Json(GenerateMenuResponse {
            success: true,
            menu_items: meal.items,
            source: meal.source,
        }))
    }

    async fn handle_generate_all_menus(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<GenerateAllMenusResponse>, AppError> {
        let request: GenerateAllMenusRequest = parse_request(json_body(body)?)?;
        let total_calories =
            calorie_target(request.total_calories, DEFAULT_TOTAL_CALORIES, "total_calories")?;

        let menus = resources
            .menu_service()?
            .generate_all_meals(total_calories)
            .await;

        Ok(Json(GenerateAllMenusResponse {
            success: true,
            menus,
        }))
    }

    async fn handle_get_suggestions(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<SuggestionsResponse>, AppError> {
        let request: SuggestionsRequest = parse_request(json_body(body)?)?;

        let generated = resources
            .menu_service()?
            .generate_suggestions(
                request.calorie_diff,
                request.protein_diff,
                request.carb_diff,
                request.fiber_diff,
            )
            .await;

        Ok(Json(SuggestionsResponse {
            success: true,
            suggestions: generated.text,
            source: generated.source,
        }))
    }
}

fn parse_request<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    let body = if body.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        body
    };
    serde_json::from_value(body).map_err(|e| AppError::invalid_input(e.to_string()))
}

/// Whole-calorie target from an optional request number, truncating fractions
fn calorie_target(value: Option<f64>, default: u32, field: &str) -> AppResult<u32> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v >= 0.0 && v <= f64::from(u32::MAX) => Ok(v.trunc() as u32),
        Some(v) => Err(AppError::invalid_input(format!(
            "Field '{field}' must be a non-negative number, got {v}"
        ))),
    }
}
