// ABOUTME: Calorie and macro calculation route
// ABOUTME: Parses biometrics, runs the Mifflin-St Jeor pipeline and reports input errors as 400
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

use super::json_body;
use crate::errors::AppError;
use crate::intelligence::{compute_nutrition_totals, BiometricInput, NutritionTotals};
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;

/// Response body of `POST /calculate_calories`
#[derive(Debug, Serialize)]
pub struct CalculateCaloriesResponse {
    /// Always `true`
    pub success: bool,
    /// BMR, TDEE and macros
    #[serde(flatten)]
    pub totals: NutritionTotals,
}

/// Nutrition calculation routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create the calculation route
    pub fn routes() -> Router {
        Router::new().route("/calculate_calories", post(Self::handle_calculate_calories))
    }

    async fn handle_calculate_calories(
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<CalculateCaloriesResponse>, AppError> {
        let body = json_body(body)?;
        let input = BiometricInput::from_json(&body)?;

        Ok(Json(CalculateCaloriesResponse {
            success: true,
            totals: compute_nutrition_totals(&input),
        }))
    }
}
