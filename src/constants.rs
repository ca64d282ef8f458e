// ABOUTME: System-wide constants for nutrition formulas, meal splits, cache TTLs and defaults
// ABOUTME: Single source for values shared by the calculator, generation service and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Constants Module
//!
//! Hardcoded constants and defaults. Values that may be overridden at runtime
//! are read by [`crate::config::environment::ServerConfig::from_env`].

/// Service names used in structured logs
pub mod service_names {
    /// Server binary service name
    pub const MINDFUL_MENU_SERVER: &str = "mindful-menu-server";
}

/// Mifflin-St Jeor coefficients and activity multipliers
pub mod nutrition {
    /// kcal per kg of body weight
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const MSJ_AGE_COEF: f64 = 5.0;
    /// Constant for male subjects
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Constant for everyone else
    pub const MSJ_OTHER_CONSTANT: f64 = -161.0;

    /// Little or no exercise
    pub const ACTIVITY_NO_ACTIVITY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const ACTIVITY_LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const ACTIVITY_MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVITY_ACTIVE: f64 = 1.725;

    /// Share of calories from protein
    pub const PROTEIN_CALORIE_SHARE: f64 = 0.25;
    /// Share of calories from carbohydrates
    pub const CARBS_CALORIE_SHARE: f64 = 0.45;
    /// Share of calories from fat
    pub const FAT_CALORIE_SHARE: f64 = 0.30;

    /// kcal per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Grams of fiber per 1000 kcal
    pub const FIBER_G_PER_1000_KCAL: f64 = 14.0;
}

/// Meal planning constants
pub mod meals {
    /// Breakfast share of the daily calories (percent)
    pub const BREAKFAST_PERCENT: u32 = 25;
    /// Lunch share of the daily calories (percent)
    pub const LUNCH_PERCENT: u32 = 35;
    /// Snack share of the daily calories (percent)
    pub const SNACK_PERCENT: u32 = 15;
    /// Dinner share of the daily calories (percent)
    pub const DINNER_PERCENT: u32 = 25;

    /// Number of dishes requested per meal
    pub const ITEMS_PER_MEAL: u32 = 5;

    /// Default calorie target of a single meal request
    pub const DEFAULT_MEAL_CALORIES: u32 = 300;
    /// Default daily calorie target of an all-meals request
    pub const DEFAULT_TOTAL_CALORIES: u32 = 2000;
    /// Default regional cuisine used in prompts
    pub const DEFAULT_CUISINE: &str = "Andhra";

    /// Model suggestions shorter than this are replaced by rule-based advice
    pub const MIN_SUGGESTION_CHARS: usize = 50;
    /// Number of suggestion lines returned
    pub const SUGGESTION_LINES: usize = 3;
}

/// Meals cache constants
pub mod cache {
    /// In-memory freshness window (1 hour)
    pub const TTL_MEALS_SECS: u64 = 3_600;
    /// Maximum age of a restorable disk snapshot (24 hours)
    pub const TTL_SNAPSHOT_SECS: u64 = 86_400;
    /// Default snapshot file name
    pub const DEFAULT_SNAPSHOT_PATH: &str = "meals_cache.json";
}

/// LLM defaults
pub mod llm {
    /// Default Gemini model
    pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
    /// Key-value file holding the API credential
    pub const DEFAULT_API_KEY_FILE: &str = "key.properties";
    /// Placeholder value shipped in sample key files
    pub const API_KEY_PLACEHOLDER: &str = "your_api_key_here";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5001;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}
