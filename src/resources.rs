// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Owns the meals cache and, when a credential exists, the menu generation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

use crate::cache::MealsCache;
use crate::config::environment::{ApiKeyStatus, ServerConfig};
use crate::errors::{AppError, AppResult};
use crate::llm::{GeminiProvider, LlmProvider};
use crate::menus::MenuGenerationService;
use std::sync::Arc;

/// Resources created once at startup and shared by all requests
#[derive(Clone)]
pub struct ServerResources {
    cache: Arc<MealsCache>,
    menu_service: Option<MenuGenerationService>,
    unavailable_reason: String,
}

impl ServerResources {
    /// Build resources from configuration
    ///
    /// Without an API key the generation service is absent and generation
    /// routes answer `CONFIG_MISSING`.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let cache = Arc::new(MealsCache::new(config.cache.clone()));

        match &config.llm.api_key {
            ApiKeyStatus::Configured { key, .. } => {
                let provider = GeminiProvider::new(key.clone()).with_default_model(&config.llm.model);
                Self::with_provider(cache, Arc::new(provider), &config.default_cuisine)
            }
            ApiKeyStatus::Missing { reason } => Self::without_generation(cache, reason.clone()),
        }
    }

    /// Resources backed by an explicit provider
    #[must_use]
    pub fn with_provider(
        cache: Arc<MealsCache>,
        provider: Arc<dyn LlmProvider>,
        cuisine: &str,
    ) -> Self {
        let menu_service = MenuGenerationService::new(provider, cache.clone()).with_cuisine(cuisine);
        Self {
            cache,
            menu_service: Some(menu_service),
            unavailable_reason: String::new(),
        }
    }

    /// Resources with menu and suggestion generation disabled
    #[must_use]
    pub fn without_generation(cache: Arc<MealsCache>, reason: impl Into<String>) -> Self {
        Self {
            cache,
            menu_service: None,
            unavailable_reason: reason.into(),
        }
    }

    /// Shared meals cache
    #[must_use]
    pub const fn cache(&self) -> &Arc<MealsCache> {
        &self.cache
    }

    /// Whether menu and suggestion generation is available
    #[must_use]
    pub const fn generation_enabled(&self) -> bool {
        self.menu_service.is_some()
    }

    /// The generation service
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when no API key was configured at startup
    pub fn menu_service(&self) -> AppResult<&MenuGenerationService> {
        self.menu_service
            .as_ref()
            .ok_or_else(|| AppError::config_missing(self.unavailable_reason.clone()))
    }
}
