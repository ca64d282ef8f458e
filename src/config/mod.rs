// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment variables, optional .env file and the API key file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Configuration module for the Mindful Menu server

/// Environment and server configuration
pub mod environment;

pub use environment::{ApiKeySource, ApiKeyStatus, LlmConfig, ServerConfig};
