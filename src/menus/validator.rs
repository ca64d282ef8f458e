// ABOUTME: Turns loosely formatted model text into validated menu structures
// ABOUTME: Fence stripping, bracket extraction, JSON parsing and per-item schema checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Menu response validation
//!
//! Model output is treated as untrusted text. Validation runs in four steps:
//!
//! 1. Remove Markdown code fence markers (```` ```json ```` and ```` ``` ````)
//! 2. Slice from the first opening bracket to the last closing bracket
//! 3. Parse the slice as JSON
//! 4. Check structure: every item needs `name`, `calories`, `protein`,
//!    `carbs` and `fiber`; one bad item rejects the whole response
//!
//! Valid values are returned as they were parsed. Nothing is clamped,
//! renamed or coerced.

use super::{DailyMenuSet, MealMenu, MealType, MenuItem};
use crate::errors::{AppError, ErrorCode};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Top-level JSON shape expected from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    /// `[ ... ]` holding menu items
    Array,
    /// `{ ... }` keyed by meal type
    Object,
}

impl JsonShape {
    const fn brackets(self) -> (char, char) {
        match self {
            Self::Array => ('[', ']'),
            Self::Object => ('{', '}'),
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => f.write_str("array"),
            Self::Object => f.write_str("object"),
        }
    }
}

/// Why a model response could not be turned into a menu
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuValidationError {
    /// No bracketed JSON region of the expected shape
    #[error("no JSON {shape} found in model response")]
    Extraction {
        /// Shape that was searched for
        shape: JsonShape,
    },
    /// The bracketed region is not valid JSON
    #[error("model response is not valid JSON: {0}")]
    Parse(String),
    /// Valid JSON with the wrong structure
    #[error("model response does not match the menu schema: {0}")]
    Schema(String),
}

impl From<MenuValidationError> for AppError {
    fn from(error: MenuValidationError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string())
    }
}

/// Remove Markdown code fence markers and surrounding whitespace
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Slice `text` from the first opening bracket to the last closing bracket
///
/// # Errors
///
/// Returns [`MenuValidationError::Extraction`] when either bracket is missing
/// or the last closing bracket comes before the first opening one
pub fn extract_json_block(text: &str, shape: JsonShape) -> Result<&str, MenuValidationError> {
    let (open, close) = shape.brackets();

    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(MenuValidationError::Extraction { shape }),
    }
}

/// Validate a single meal's menu in array mode
///
/// # Errors
///
/// Returns the first extraction, parse or schema failure
pub fn validate_meal_menu(raw: &str) -> Result<MealMenu, MenuValidationError> {
    let value = parse_block(raw, JsonShape::Array)?;
    menu_from_value(&value, "response")
}

/// Validate a full day's menus in object mode
///
/// # Errors
///
/// Returns the first extraction, parse or schema failure
pub fn validate_daily_menu_set(raw: &str) -> Result<DailyMenuSet, MenuValidationError> {
    let value = parse_block(raw, JsonShape::Object)?;
    let Value::Object(meals) = &value else {
        return Err(MenuValidationError::Schema(
            "expected an object keyed by meal type".to_owned(),
        ));
    };

    let menu_for = |meal_type: MealType| {
        let menu = meals.get(meal_type.as_str()).ok_or_else(|| {
            MenuValidationError::Schema(format!("missing meal '{meal_type}'"))
        })?;
        menu_from_value(menu, meal_type.as_str())
    };

    Ok(DailyMenuSet {
        breakfast: menu_for(MealType::Breakfast)?,
        lunch: menu_for(MealType::Lunch)?,
        snack: menu_for(MealType::Snack)?,
        dinner: menu_for(MealType::Dinner)?,
    })
}

fn parse_block(raw: &str, shape: JsonShape) -> Result<Value, MenuValidationError> {
    let cleaned = strip_code_fences(raw);
    let block = extract_json_block(&cleaned, shape)?;
    serde_json::from_str(block).map_err(|e| MenuValidationError::Parse(e.to_string()))
}

/// Check the menu invariants of a set that did not come from model text
///
/// Every meal must be non-empty and every dish must have a non-blank name
/// and non-negative values.
///
/// # Errors
///
/// Returns [`MenuValidationError::Schema`] for the first violation
pub fn check_daily_menu_set(set: &DailyMenuSet) -> Result<(), MenuValidationError> {
    MealType::ALL
        .iter()
        .try_for_each(|&meal_type| check_meal_menu(set.get(meal_type), meal_type.as_str()))
}

fn menu_from_value(value: &Value, context: &str) -> Result<MealMenu, MenuValidationError> {
    let Value::Array(items) = value else {
        return Err(MenuValidationError::Schema(format!(
            "{context}: expected an array of menu items"
        )));
    };

    let menu = items
        .iter()
        .enumerate()
        .map(|(index, item)| item_from_value(item, &format!("{context}[{index}]")))
        .collect::<Result<MealMenu, _>>()?;

    check_meal_menu(&menu, context)?;
    Ok(menu)
}

fn check_meal_menu(menu: &[MenuItem], context: &str) -> Result<(), MenuValidationError> {
    if menu.is_empty() {
        return Err(MenuValidationError::Schema(format!(
            "{context}: menu is empty"
        )));
    }

    menu.iter()
        .enumerate()
        .try_for_each(|(index, item)| check_menu_item(item, &format!("{context}[{index}]")))
}

fn check_menu_item(item: &MenuItem, context: &str) -> Result<(), MenuValidationError> {
    if item.name.trim().is_empty() {
        return Err(MenuValidationError::Schema(format!(
            "{context}: 'name' is empty"
        )));
    }

    let values = [
        ("calories", item.calories),
        ("protein", item.protein_g),
        ("carbs", item.carbs_g),
        ("fiber", item.fiber_g),
    ];
    match values.iter().find(|(_, value)| value.is_nan() || *value < 0.0) {
        Some((field, _)) => Err(MenuValidationError::Schema(format!(
            "{context}: '{field}' is negative"
        ))),
        None => Ok(()),
    }
}

/// Structural extraction only; value rules live in [`check_menu_item`]
fn item_from_value(value: &Value, context: &str) -> Result<MenuItem, MenuValidationError> {
    let Value::Object(fields) = value else {
        return Err(MenuValidationError::Schema(format!(
            "{context}: expected an object"
        )));
    };

    let name = match fields.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => {
            return Err(MenuValidationError::Schema(format!(
                "{context}: 'name' must be a string"
            )))
        }
        None => {
            return Err(MenuValidationError::Schema(format!(
                "{context}: missing 'name'"
            )))
        }
    };

    Ok(MenuItem {
        name,
        calories: number_field(fields, "calories", context)?,
        protein_g: number_field(fields, "protein", context)?,
        carbs_g: number_field(fields, "carbs", context)?,
        fiber_g: number_field(fields, "fiber", context)?,
    })
}

fn number_field(
    fields: &Map<String, Value>,
    field: &str,
    context: &str,
) -> Result<f64, MenuValidationError> {
    fields
        .get(field)
        .ok_or_else(|| MenuValidationError::Schema(format!("{context}: missing '{field}'")))?
        .as_f64()
        .ok_or_else(|| MenuValidationError::Schema(format!("{context}: '{field}' must be a number")))
}
