// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted LLM provider, meal fixtures and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mindful_menu`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use mindful_menu::{
    cache::{CacheConfig, MealsCache},
    errors::{AppError, ErrorCode},
    llm::{ChatRequest, ChatResponse, LlmProvider},
    resources::ServerResources,
};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// What the scripted provider does once its queue is empty
#[derive(Debug, Clone)]
pub enum WhenExhausted {
    /// Fail every further call
    Fail,
    /// Keep answering with this text
    Repeat(String),
}

/// LLM provider answering from a script, recording every prompt it sees
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, AppError>>>,
    when_exhausted: WhenExhausted,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Provider whose every call fails with an upstream error
    pub fn failing() -> Self {
        Self::with_script(Vec::new(), WhenExhausted::Fail)
    }

    /// Provider that always answers `text`
    pub fn always(text: impl Into<String>) -> Self {
        Self::with_script(Vec::new(), WhenExhausted::Repeat(text.into()))
    }

    /// Provider serving `responses` in order, then following `when_exhausted`
    pub fn with_script(
        responses: Vec<Result<String, AppError>>,
        when_exhausted: WhenExhausted,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            when_exhausted,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// User prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = request.messages.last() {
            self.prompts.lock().unwrap().push(message.content.clone());
        }

        let next = self.responses.lock().unwrap().pop_front();
        let text = match next {
            Some(result) => result?,
            None => match &self.when_exhausted {
                WhenExhausted::Fail => {
                    return Err(AppError::new(
                        ErrorCode::ExternalServiceError,
                        "scripted provider failure",
                    ))
                }
                WhenExhausted::Repeat(text) => text.clone(),
            },
        };

        Ok(ChatResponse {
            content: text,
            model: "scripted-model".to_owned(),
            finish_reason: Some("STOP".to_owned()),
        })
    }
}

/// A well-formed five dish model answer wrapped in a code fence
pub fn fenced_menu_response() -> String {
    r#"Here is your menu:
```json
[
    {"name": "Pesarattu", "calories": 110, "protein": 7, "carbs": 15, "fiber": 3},
    {"name": "Upma", "calories": 95, "protein": 3, "carbs": 17, "fiber": 2},
    {"name": "Idli", "calories": 80, "protein": 2.5, "carbs": 16, "fiber": 1},
    {"name": "Punugulu", "calories": 120, "protein": 3, "carbs": 14, "fiber": 1},
    {"name": "Minapa Garelu", "calories": 100, "protein": 5, "carbs": 12, "fiber": 2}
]
```
Enjoy!"#
        .to_owned()
}

/// Default cache config with the snapshot file under `dir`
pub fn cache_config_in(dir: &Path) -> CacheConfig {
    CacheConfig {
        snapshot_path: Some(dir.join("meals_cache.json")),
        ..CacheConfig::default()
    }
}

/// Resources backed by `provider` with an in-memory cache
pub fn resources_with(provider: Arc<dyn LlmProvider>) -> Arc<ServerResources> {
    init_test_logging();
    let cache = Arc::new(MealsCache::new(CacheConfig::in_memory_only()));
    Arc::new(ServerResources::with_provider(cache, provider, "Andhra"))
}

/// Resources without a configured API key
pub fn resources_without_key() -> Arc<ServerResources> {
    init_test_logging();
    let cache = Arc::new(MealsCache::new(CacheConfig::in_memory_only()));
    Arc::new(ServerResources::without_generation(
        cache,
        "GEMINI_API_KEY is not set and key.properties was not found",
    ))
}
