// ABOUTME: Prompt templates for menu and suggestion generation loaded at compile time
// ABOUTME: Fills cuisine, meal type and nutrition deltas into the markdown templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.
//! Placeholders use the `{{name}}` form.

use crate::constants::meals::ITEMS_PER_MEAL;
use crate::menus::MealType;

/// Template asking for one meal's dishes as a JSON array
pub const MEAL_MENU_TEMPLATE: &str = include_str!("meal_menu.md");

/// Template asking for three bullet-point recommendations
pub const NUTRITION_SUGGESTIONS_TEMPLATE: &str = include_str!("nutrition_suggestions.md");

/// Build the menu prompt for one meal
#[must_use]
pub fn meal_menu_prompt(cuisine: &str, meal_type: MealType, target_calories: u32) -> String {
    MEAL_MENU_TEMPLATE
        .replace("{{cuisine}}", cuisine)
        .replace("{{item_count}}", &ITEMS_PER_MEAL.to_string())
        .replace("{{meal_type}}", meal_type.as_str())
        .replace("{{calories}}", &target_calories.to_string())
}

/// Build the suggestion prompt from intake deltas
#[must_use]
pub fn nutrition_suggestions_prompt(
    cuisine: &str,
    calorie_diff: f64,
    protein_diff: f64,
    carb_diff: f64,
    fiber_diff: f64,
) -> String {
    NUTRITION_SUGGESTIONS_TEMPLATE
        .replace("{{cuisine}}", cuisine)
        .replace("{{calorie_diff}}", &calorie_diff.to_string())
        .replace("{{protein_diff}}", &protein_diff.to_string())
        .replace("{{carb_diff}}", &carb_diff.to_string())
        .replace("{{fiber_diff}}", &fiber_diff.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_menu_prompt_fills_placeholders() {
        let prompt = meal_menu_prompt("Andhra", MealType::Snack, 300);
        assert!(prompt.contains("exactly 5 authentic Andhra snack dishes"));
        assert!(prompt.contains("calories around 300"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_suggestion_prompt_fills_deltas() {
        let prompt = nutrition_suggestions_prompt("Andhra", -300.0, -15.5, 0.0, 2.0);
        assert!(prompt.contains("Calorie difference: -300 calories"));
        assert!(prompt.contains("Protein difference: -15.5 grams"));
        assert!(!prompt.contains("{{"));
    }
}
