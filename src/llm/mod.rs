// ABOUTME: LLM provider abstraction used by the menu generation service
// ABOUTME: Defines the text completion contract and the message/request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # LLM Provider Interface
//!
//! Menu and suggestion generation only need single-shot text completion, so
//! the contract is one async `complete` call. Tests substitute a scripted
//! provider through the same trait.
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use mindful_menu::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![ChatMessage::user("Suggest an Andhra breakfast")]);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction
    System,
    /// User input
    User,
}

/// A single message in a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message author
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a new message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A completion request; the provider's configured model answers it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Create a request from messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }
}

/// Completion result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text
    pub content: String,
    /// Model that produced the text
    pub model: String,
    /// Why generation stopped
    pub finish_reason: Option<String>,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Text completion provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Perform a single completion
    ///
    /// # Errors
    ///
    /// Returns an external service error when the provider call fails or
    /// returns no usable text
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
