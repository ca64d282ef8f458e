// ABOUTME: Menu and suggestion generation via the LLM with validation and static fallbacks
// ABOUTME: Daily menus are cached by calorie total and snapshotted to disk after generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Menu Generation Service
//!
//! Every public operation returns content. Provider failures and invalid
//! model output are logged at `warn` and replaced by the fallback catalog or
//! the rule-based suggestions, with [`MenuSource`] recording which one the
//! caller received.
//!
//! Daily sets are generated as four independent meal requests issued
//! concurrently. The cache lock is never held while a provider call is in
//! flight, so two concurrent misses for the same total may both generate;
//! the last `put` wins.

use super::fallback::fallback_menu;
use super::validator::validate_meal_menu;
use super::{DailyMenuSet, MealMenu, MealTargets, MealType, MenuSource};
use crate::cache::MealsCache;
use crate::constants::meals::{DEFAULT_CUISINE, MIN_SUGGESTION_CHARS};
use crate::errors::{AppError, AppResult};
use crate::intelligence::suggestions::suggest;
use crate::llm::prompts::{meal_menu_prompt, nutrition_suggestions_prompt};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// One meal's dishes and where they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMeal {
    /// Dishes for the meal
    pub items: MealMenu,
    /// Model output or fallback catalog
    pub source: MenuSource,
}

/// Suggestion text and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSuggestions {
    /// Bullet-point advice
    pub text: String,
    /// Model output or rule-based fallback
    pub source: MenuSource,
}

/// Orchestrates prompts, validation, fallbacks and the daily menu cache
#[derive(Clone)]
pub struct MenuGenerationService {
    provider: Arc<dyn LlmProvider>,
    cache: Arc<MealsCache>,
    cuisine: String,
}

impl MenuGenerationService {
    /// Create a service using the default cuisine
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, cache: Arc<MealsCache>) -> Self {
        Self {
            provider,
            cache,
            cuisine: DEFAULT_CUISINE.to_owned(),
        }
    }

    /// Set the cuisine used when a request does not name one
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Default cuisine
    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Generate one meal's menu in the default cuisine
    pub async fn generate_meal(&self, meal_type: MealType, target_calories: u32) -> GeneratedMeal {
        self.generate_meal_for_cuisine(meal_type, target_calories, &self.cuisine)
            .await
    }

    /// Generate one meal's menu, falling back to the static catalog on any failure
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn generate_meal_for_cuisine(
        &self,
        meal_type: MealType,
        target_calories: u32,
        cuisine: &str,
    ) -> GeneratedMeal {
        match self
            .request_meal(meal_type, target_calories, cuisine)
            .await
        {
            Ok(items) => {
                debug!(items = items.len(), "Model menu accepted");
                GeneratedMeal {
                    items,
                    source: MenuSource::Ai,
                }
            }
            Err(e) => {
                warn!(error = %e, "Menu generation failed, using fallback catalog");
                GeneratedMeal {
                    items: fallback_menu(meal_type, target_calories),
                    source: MenuSource::Fallback,
                }
            }
        }
    }

    /// Menus for all four meals, served from the cache when fresh
    ///
    /// On a miss the day is split 25/35/15/25 and each meal is generated
    /// independently. The result is cached and then snapshotted; a snapshot
    /// failure is logged and does not affect the returned set.
    #[instrument(skip(self))]
    pub async fn generate_all_meals(&self, total_calories: u32) -> DailyMenuSet {
        if let Some(cached) = self.cache.get(total_calories).await {
            return cached;
        }

        let targets = MealTargets::from_total(total_calories);
        let (breakfast, lunch, snack, dinner) = tokio::join!(
            self.generate_meal(MealType::Breakfast, targets.breakfast),
            self.generate_meal(MealType::Lunch, targets.lunch),
            self.generate_meal(MealType::Snack, targets.snack),
            self.generate_meal(MealType::Dinner, targets.dinner),
        );

        let fallbacks = [&breakfast, &lunch, &snack, &dinner]
            .iter()
            .filter(|meal| meal.source == MenuSource::Fallback)
            .count();
        info!(fallbacks, "Generated daily menus");

        let menu_set = DailyMenuSet {
            breakfast: breakfast.items,
            lunch: lunch.items,
            snack: snack.items,
            dinner: dinner.items,
        };

        self.cache.put(total_calories, menu_set.clone()).await;
        if let Err(e) = self.cache.persist().await {
            warn!(error = %e, "Failed to persist meals cache snapshot");
        }

        menu_set
    }

    /// Three lines of advice for the given intake deltas
    ///
    /// Uses the rule-based generator when the provider fails or answers with
    /// fewer than 50 characters.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn generate_suggestions(
        &self,
        calorie_diff: f64,
        protein_diff: f64,
        carb_diff: f64,
        fiber_diff: f64,
    ) -> GeneratedSuggestions {
        let prompt = nutrition_suggestions_prompt(
            &self.cuisine,
            calorie_diff,
            protein_diff,
            carb_diff,
            fiber_diff,
        );

        let reason = match self.complete_prompt(prompt).await {
            Ok(text) if text.trim().chars().count() >= MIN_SUGGESTION_CHARS => {
                return GeneratedSuggestions {
                    text: text.trim().to_owned(),
                    source: MenuSource::Ai,
                };
            }
            Ok(text) => AppError::external_service(
                self.provider.name(),
                format!("suggestion text too short ({} chars)", text.trim().len()),
            ),
            Err(e) => e,
        };

        warn!(error = %reason, "Suggestion generation failed, using rule-based advice");
        GeneratedSuggestions {
            text: suggest(calorie_diff, protein_diff, carb_diff, fiber_diff),
            source: MenuSource::Fallback,
        }
    }

    async fn request_meal(
        &self,
        meal_type: MealType,
        target_calories: u32,
        cuisine: &str,
    ) -> AppResult<MealMenu> {
        let text = self
            .complete_prompt(meal_menu_prompt(cuisine, meal_type, target_calories))
            .await?;
        Ok(validate_meal_menu(&text)?)
    }

    async fn complete_prompt(&self, prompt: String) -> AppResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        let response = self.provider.complete(&request).await?;
        debug!(
            model = %response.model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            "Provider completed"
        );
        Ok(response.content)
    }
}
