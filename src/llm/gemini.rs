// ABOUTME: Google Gemini text completion provider over the Generative Language REST API
// ABOUTME: Maps HTTP failures to external service errors and redacts the key in Debug output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! The API key comes from `GEMINI_API_KEY` or a `key.properties` file, see
//! [`crate::config::environment::ServerConfig::from_env`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use mindful_menu::llm::{GeminiProvider, LlmProvider, ChatRequest, ChatMessage};
//! use mindful_menu::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::new("api-key");
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::user("Name three Andhra breakfast dishes"),
//!     ]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole};
use crate::constants::llm::DEFAULT_GEMINI_MODEL;
use crate::errors::{AppError, ErrorCode};

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Service label used in error messages
const SERVICE_NAME: &str = "Gemini";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Text part of a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_GEMINI_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at a different API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{model}:{method}?key={}",
            self.base_url, self.api_key
        )
    }

    fn text_content(text: &str) -> Vec<ContentPart> {
        vec![ContentPart {
            text: Some(text.to_owned()),
        }]
    }

    /// Convert chat messages to Gemini format
    fn convert_messages(messages: &[ChatMessage]) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut contents = Vec::new();
        let mut system_instruction = None;

        for message in messages {
            if message.role == MessageRole::System {
                // Gemini uses separate system_instruction field
                system_instruction = Some(GeminiContent {
                    role: None,
                    parts: Self::text_content(&message.content),
                });
            } else {
                contents.push(GeminiContent {
                    role: Some("user".to_owned()),
                    parts: Self::text_content(&message.content),
                });
            }
        }

        (contents, system_instruction)
    }

    /// Build a Gemini API request from a `ChatRequest`
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let (contents, system_instruction) = Self::convert_messages(&request.messages);

        GeminiRequest {
            contents,
            system_instruction,
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_content(response: &GeminiResponse) -> Result<String, AppError> {
        let parts = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default();

        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                "No text content in response",
            ));
        }

        Ok(text)
    }

    /// Map API error status to appropriate error type
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{SERVICE_NAME} rejected the API key: {message}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("{SERVICE_NAME} quota exceeded: {message}"),
            ),
            _ => AppError::external_service(SERVICE_NAME, format!("API error ({status}): {message}")),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = %self.default_model))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = self.default_model.as_str();
        let url = self.build_url(model, "generateContent");

        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ExternalServiceUnavailable,
                    format!("{SERVICE_NAME} request failed: {}", e.without_url()),
                )
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
            })?;

        if let Some(error) = &gemini_response.error {
            return Err(AppError::external_service(SERVICE_NAME, &error.message));
        }

        let content = Self::extract_content(&gemini_response)?;
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!(chars = content.len(), "Received Gemini response");

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            finish_reason,
        })
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            // Omit `client` field as HTTP clients are not useful to debug
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_api_error_codes() {
        let body = r#"{"error": {"message": "Resource has been exhausted"}}"#;
        let err = GeminiProvider::map_api_error(429, body);
        assert_eq!(err.code, ErrorCode::ExternalRateLimited);
        assert!(err.message.contains("Resource has been exhausted"));

        assert_eq!(
            GeminiProvider::map_api_error(403, "denied").code,
            ErrorCode::ExternalAuthFailed
        );
        assert_eq!(
            GeminiProvider::map_api_error(500, "boom").code,
            ErrorCode::ExternalServiceError
        );
    }

    #[test]
    fn test_extract_content_joins_text_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "[1, "}, {"text": "2]"}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiProvider::extract_content(&response).unwrap(), "[1, 2]");

        let empty: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(GeminiProvider::extract_content(&empty).is_err());
    }

    #[test]
    fn test_system_message_becomes_instruction() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("You are a nutritionist"),
            ChatMessage::user("Plan lunch"),
        ]);
        let gemini_request = GeminiProvider::build_gemini_request(&request);
        assert_eq!(gemini_request.contents.len(), 1);
        assert!(gemini_request.system_instruction.is_some());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = GeminiProvider::new("super-secret");
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
