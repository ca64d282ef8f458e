// ABOUTME: Route module organization for the Mindful Menu HTTP API
// ABOUTME: Builds the application router with request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Route module for the Mindful Menu server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the calculator or the generation service.

/// Health check route
pub mod health;
/// Menu and suggestion generation routes
pub mod menus;
/// Calorie and macro calculation route
pub mod nutrition;

pub use health::HealthRoutes;
pub use menus::MenuRoutes;
pub use nutrition::NutritionRoutes;

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::{extract::rejection::JsonRejection, Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(NutritionRoutes::routes())
        .merge(MenuRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}

/// Unwrap a JSON body, reporting malformed JSON as invalid input
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::invalid_input(e.body_text()))
}
