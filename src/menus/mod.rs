// ABOUTME: Menu domain model shared by the validator, fallback catalog, cache and service
// ABOUTME: Meal types, menu items, the four-meal daily set and per-meal calorie targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Menus
//!
//! A [`DailyMenuSet`] is a struct with one field per [`MealType`], so a set
//! that exists always carries all four meals. Whether each menu is non-empty
//! is enforced where sets are built: the validator rejects empty meals and the
//! fallback catalog always yields five dishes.

/// Static fallback dishes per meal type
pub mod fallback;
/// Menu generation orchestration with fallback and caching
pub mod service;
/// Extraction and schema validation of raw model output
pub mod validator;

use crate::constants::meals::{BREAKFAST_PERCENT, DINNER_PERCENT, LUNCH_PERCENT, SNACK_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use fallback::{fallback_daily_menu_set, fallback_menu};
pub use service::{GeneratedMeal, GeneratedSuggestions, MenuGenerationService};
pub use validator::{
    check_daily_menu_set, validate_daily_menu_set, validate_meal_menu, MenuValidationError,
};

/// One of the four daily meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Between-meal snack
    Snack,
    /// Evening meal
    Dinner,
}

impl MealType {
    /// All meal types in the order they are served
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Wire name of this meal type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        }
    }

    /// Share of the daily calories assigned to this meal, in percent
    #[must_use]
    pub const fn calorie_percent(self) -> u32 {
        match self {
            Self::Breakfast => BREAKFAST_PERCENT,
            Self::Lunch => LUNCH_PERCENT,
            Self::Snack => SNACK_PERCENT,
            Self::Dinner => DINNER_PERCENT,
        }
    }

    /// Resolve a request label, treating anything unrecognised as lunch
    #[must_use]
    pub fn from_label_or_lunch(label: &str) -> Self {
        label.parse().unwrap_or(Self::Lunch)
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!("unknown meal type '{other}'")),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dish with its nutrition values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Dish name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Fiber (grams)
    #[serde(rename = "fiber")]
    pub fiber_g: f64,
}

impl MenuItem {
    /// Create a menu item
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fiber_g: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fiber_g,
        }
    }
}

/// Ordered dishes for one meal
pub type MealMenu = Vec<MenuItem>;

/// Menus for all four meals of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMenuSet {
    /// Breakfast dishes
    pub breakfast: MealMenu,
    /// Lunch dishes
    pub lunch: MealMenu,
    /// Snack dishes
    pub snack: MealMenu,
    /// Dinner dishes
    pub dinner: MealMenu,
}

impl DailyMenuSet {
    /// Build a set by producing the menu of each meal type in turn
    pub fn from_fn(mut menu_for: impl FnMut(MealType) -> MealMenu) -> Self {
        Self {
            breakfast: menu_for(MealType::Breakfast),
            lunch: menu_for(MealType::Lunch),
            snack: menu_for(MealType::Snack),
            dinner: menu_for(MealType::Dinner),
        }
    }

    /// Menu for one meal type
    #[must_use]
    pub fn get(&self, meal_type: MealType) -> &MealMenu {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Snack => &self.snack,
            MealType::Dinner => &self.dinner,
        }
    }
}

/// Where a menu or suggestion text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSource {
    /// Validated model output
    Ai,
    /// Static fallback content
    Fallback,
}

/// Per-meal calorie targets derived from a daily total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTargets {
    /// Breakfast target (kcal)
    pub breakfast: u32,
    /// Lunch target (kcal)
    pub lunch: u32,
    /// Snack target (kcal)
    pub snack: u32,
    /// Dinner target (kcal)
    pub dinner: u32,
}

impl MealTargets {
    /// Split a daily total 25/35/15/25, truncating each share
    #[must_use]
    pub fn from_total(total_calories: u32) -> Self {
        let share = |meal_type: MealType| {
            (u64::from(total_calories) * u64::from(meal_type.calorie_percent()) / 100) as u32
        };

        Self {
            breakfast: share(MealType::Breakfast),
            lunch: share(MealType::Lunch),
            snack: share(MealType::Snack),
            dinner: share(MealType::Dinner),
        }
    }

    /// Target for one meal type
    #[must_use]
    pub const fn for_meal(&self, meal_type: MealType) -> u32 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Snack => self.snack,
            MealType::Dinner => self.dinner,
        }
    }
}
