// ABOUTME: Intelligence module grouping the closed-form nutrition math and advice rules
// ABOUTME: Pure functions with no external calls, shared by routes and the menu service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Intelligence Module
//!
//! Deterministic nutrition analytics. Nothing in here talks to the model.

/// BMR, TDEE and macro targets (Mifflin-St Jeor)
pub mod nutrition_calculator;
/// Rule-based suggestion text used when the model is unavailable
pub mod suggestions;

pub use nutrition_calculator::{
    compute_bmr, compute_macros, compute_nutrition_totals, compute_tdee, round_one_decimal,
    ActivityLevel, BiometricInput, Gender, Macros, NutritionTotals,
};
pub use suggestions::suggest;
