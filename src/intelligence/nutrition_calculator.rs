// ABOUTME: Nutrition calculation algorithms using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE and fixed-ratio macronutrient targets from request biometrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Nutrition Calculator Module
//!
//! Closed-form calorie and macronutrient targets. The functions are pure and
//! do not enforce physiological ranges: zero or negative inputs flow through
//! the arithmetic unchanged.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! # Rounding
//!
//! Reported values are rounded to one decimal place with round-half-away-from-zero
//! (`f64::round` applied to the value multiplied by ten).

use crate::constants::nutrition::{
    ACTIVITY_ACTIVE, ACTIVITY_LIGHT, ACTIVITY_MODERATE, ACTIVITY_NO_ACTIVITY,
    CARBS_CALORIE_SHARE, FAT_CALORIE_SHARE, FIBER_G_PER_1000_KCAL, KCAL_PER_G_CARBS,
    KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, MSJ_AGE_COEF, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT,
    MSJ_OTHER_CONSTANT, MSJ_WEIGHT_COEF, PROTEIN_CALORIE_SHARE,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Any other label (-161)
    Other,
}

impl Gender {
    /// Resolve a request label; only `male` (any case) selects the male constant
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Other
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    NoActivity,
    /// Light exercise
    Light,
    /// Moderate exercise
    Moderate,
    /// Hard exercise
    Active,
}

impl ActivityLevel {
    /// Resolve a request label; unrecognised labels behave as `no_activity`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            _ => Self::NoActivity,
        }
    }

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::NoActivity => ACTIVITY_NO_ACTIVITY,
            Self::Light => ACTIVITY_LIGHT,
            Self::Moderate => ACTIVITY_MODERATE,
            Self::Active => ACTIVITY_ACTIVE,
        }
    }
}

/// Per-request biometrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Age in years
    pub age: u32,
    /// Gender used for the BMR constant
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
}

impl BiometricInput {
    /// Parse a `calculate_calories` request body
    ///
    /// Numbers may be sent as JSON numbers or numeric strings. Age is
    /// truncated towards zero like an integer conversion.
    ///
    /// # Errors
    ///
    /// Returns an input error when a field is missing or not numeric
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let age = numeric_field(body, "age")?;
        if age < 0.0 || age > f64::from(u32::MAX) {
            return Err(AppError::invalid_input(format!(
                "Field 'age' must be a non-negative integer, got {age}"
            )));
        }

        Ok(Self {
            age: age.trunc() as u32,
            gender: Gender::from_label(text_field(body, "gender")?),
            height_cm: numeric_field(body, "height")?,
            weight_kg: numeric_field(body, "weight")?,
            activity_level: ActivityLevel::from_label(text_field(body, "activity_level")?),
        })
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein (grams)
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Fat (grams)
    #[serde(rename = "fat")]
    pub fat_g: f64,
    /// Fiber (grams)
    #[serde(rename = "fiber")]
    pub fiber_g: f64,
}

/// Complete calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
    /// Macro split of the TDEE
    pub macros: Macros,
}

/// Round to one decimal place, halves away from zero
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Male: +5
/// - Other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> f64 {
    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Other => MSJ_OTHER_CONSTANT,
    };

    MSJ_WEIGHT_COEF.mul_add(
        weight_kg,
        MSJ_HEIGHT_COEF.mul_add(height_cm, -MSJ_AGE_COEF * f64::from(age)),
    ) + gender_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn compute_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Split a calorie budget into macronutrient grams
///
/// 25% protein and 45% carbohydrates at 4 kcal/g, 30% fat at 9 kcal/g,
/// 14 g fiber per 1000 kcal. Each value is rounded to one decimal.
#[must_use]
pub fn compute_macros(calories: f64) -> Macros {
    Macros {
        protein_g: round_one_decimal(calories * PROTEIN_CALORIE_SHARE / KCAL_PER_G_PROTEIN),
        carbs_g: round_one_decimal(calories * CARBS_CALORIE_SHARE / KCAL_PER_G_CARBS),
        fat_g: round_one_decimal(calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT),
        fiber_g: round_one_decimal(calories / 1000.0 * FIBER_G_PER_1000_KCAL),
    }
}

/// Calculate BMR, TDEE and macros for one request
///
/// BMR and TDEE are reported rounded; the macros are derived from the
/// unrounded TDEE.
#[must_use]
pub fn compute_nutrition_totals(input: &BiometricInput) -> NutritionTotals {
    let bmr = compute_bmr(input.age, input.gender, input.height_cm, input.weight_kg);
    let tdee = compute_tdee(bmr, input.activity_level);

    NutritionTotals {
        bmr: round_one_decimal(bmr),
        tdee: round_one_decimal(tdee),
        macros: compute_macros(tdee),
    }
}

fn numeric_field(body: &Value, field: &str) -> AppResult<f64> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| AppError::invalid_input(format!("Field '{field}' is not a number"))),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            AppError::invalid_input(format!("Field '{field}' is not a number: '{s}'"))
        }),
        Some(_) => Err(AppError::invalid_input(format!(
            "Field '{field}' is not a number"
        ))),
    }
}

fn text_field<'a>(body: &'a Value, field: &str) -> AppResult<&'a str> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::missing_field(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::invalid_input(format!(
            "Field '{field}' must be a string"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_round_one_decimal_halves_away_from_zero() {
        assert!((round_one_decimal(2.25) - 2.3).abs() < 1e-9);
        assert!((round_one_decimal(-2.25) + 2.3).abs() < 1e-9);
        assert!((round_one_decimal(104.16666) - 104.2).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let body = json!({
            "age": "30",
            "gender": "Male",
            "height": "175.5",
            "weight": 70,
            "activity_level": "light"
        });
        let input = BiometricInput::from_json(&body).unwrap();
        assert_eq!(input.age, 30);
        assert_eq!(input.gender, Gender::Male);
        assert!((input.height_cm - 175.5).abs() < f64::EPSILON);
        assert_eq!(input.activity_level, ActivityLevel::Light);
    }

    #[test]
    fn test_missing_and_non_numeric_fields_are_rejected() {
        let missing = json!({"gender": "male", "height": 170, "weight": 70, "activity_level": "light"});
        let err = BiometricInput::from_json(&missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);

        let garbage = json!({"age": "thirty", "gender": "male", "height": 170, "weight": 70, "activity_level": "light"});
        let err = BiometricInput::from_json(&garbage).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
