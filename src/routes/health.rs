// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness, whether generation is configured and the cached calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let cached_total_calories = resources.cache().current_key().await;

        Json(serde_json::json!({
            "status": "healthy",
            "generation": if resources.generation_enabled() { "configured" } else { "unavailable" },
            "cached_total_calories": cached_total_calories,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
