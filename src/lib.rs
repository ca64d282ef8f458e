// ABOUTME: Main library entry point for the Mindful Menu nutrition API
// ABOUTME: Calorie targets, AI-generated meal menus with fallbacks and a snapshot-backed cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Mindful Menu
//!
//! An HTTP service that turns biometrics into daily calorie and macro
//! targets, asks a generative model (Gemini) for regional meal menus and
//! falls back to a static dish catalogue whenever the model misbehaves.
//!
//! ## Architecture
//!
//! - **Intelligence**: Mifflin-St Jeor BMR, TDEE, macro split and rule-based advice
//! - **Menus**: meal types, calorie split, response validation, fallbacks and the generation service
//! - **LLM**: provider trait, Gemini client and prompt templates
//! - **Cache**: single-slot daily menu cache with an on-disk snapshot
//! - **Routes**: axum handlers for the JSON API
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mindful_menu::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Mindful Menu configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Single-slot meals cache and its on-disk snapshot
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Nutrition calculations and rule-based suggestions
pub mod intelligence;

/// Generative model providers and prompt templates
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Meal menu types, validation, fallbacks and generation
pub mod menus;

/// Shared state handed to route handlers
pub mod resources;

/// `HTTP` routes
pub mod routes;
