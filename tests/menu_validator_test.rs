// ABOUTME: Integration tests for model response extraction and menu schema validation
// ABOUTME: Covers fenced output, surrounding prose, all-or-nothing items and object mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use mindful_menu::errors::{AppError, ErrorCode};
use mindful_menu::menus::validator::{
    validate_daily_menu_set, validate_meal_menu, JsonShape, MenuValidationError,
};
use mindful_menu::menus::MealType;

fn item(name: &str) -> String {
    format!(r#"{{"name": "{name}", "calories": 120, "protein": 4, "carbs": 20, "fiber": 2}}"#)
}

#[test]
fn test_fenced_response_with_prose_is_accepted() {
    let menu = validate_meal_menu(&common::fenced_menu_response()).unwrap();

    assert_eq!(menu.len(), 5);
    assert_eq!(menu[0].name, "Pesarattu");
    assert!((menu[2].protein_g - 2.5).abs() < f64::EPSILON);
    assert!((menu[4].calories - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_values_are_passed_through_unchanged() {
    let raw = r#"[{"name": "Gongura Pachadi", "calories": 1234.5, "protein": 0, "carbs": 0.25, "fiber": 99}]"#;
    let menu = validate_meal_menu(raw).unwrap();

    assert!((menu[0].calories - 1234.5).abs() < f64::EPSILON);
    assert!(menu[0].protein_g.abs() < f64::EPSILON);
    assert!((menu[0].fiber_g - 99.0).abs() < f64::EPSILON);
}

#[test]
fn test_extra_fields_are_ignored() {
    let raw = r#"[{"name": "Upma", "calories": 200, "protein": 5, "carbs": 30, "fiber": 3, "fat": 7, "region": "Guntur"}]"#;
    assert_eq!(validate_meal_menu(raw).unwrap().len(), 1);
}

#[test]
fn test_one_bad_item_rejects_whole_response() {
    let raw = format!(
        r#"[{}, {}, {}, {}, {{"name": "Vada", "calories": 150, "protein": 5, "carbs": 18}}]"#,
        item("Idli"),
        item("Dosa"),
        item("Upma"),
        item("Pongal")
    );

    let err = validate_meal_menu(&raw).unwrap_err();
    match err {
        MenuValidationError::Schema(message) => {
            assert!(message.contains("[4]"), "{message}");
            assert!(message.contains("fiber"), "{message}");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_blank_name_and_negative_values_are_rejected() {
    let blank = r#"[{"name": "  ", "calories": 100, "protein": 1, "carbs": 1, "fiber": 1}]"#;
    assert!(matches!(
        validate_meal_menu(blank),
        Err(MenuValidationError::Schema(_))
    ));

    let negative = r#"[{"name": "Rasam", "calories": -5, "protein": 1, "carbs": 1, "fiber": 1}]"#;
    assert!(matches!(
        validate_meal_menu(negative),
        Err(MenuValidationError::Schema(_))
    ));
}

#[test]
fn test_empty_array_is_rejected() {
    assert!(matches!(
        validate_meal_menu("[]"),
        Err(MenuValidationError::Schema(_))
    ));
}

#[test]
fn test_prose_without_json_is_an_extraction_failure() {
    assert_eq!(
        validate_meal_menu("Sorry, I cannot help with that."),
        Err(MenuValidationError::Extraction {
            shape: JsonShape::Array
        })
    );
}

#[test]
fn test_truncated_json_is_a_parse_failure() {
    let raw = r#"[{"name": "Idli", "calories": 80,] trailing ]"#;
    assert!(matches!(
        validate_meal_menu(raw),
        Err(MenuValidationError::Parse(_))
    ));
}

#[test]
fn test_daily_set_in_object_mode() {
    let raw = format!(
        "```json\n{{\"breakfast\": [{}], \"lunch\": [{}], \"snack\": [{}], \"dinner\": [{}]}}\n```",
        item("Pesarattu"),
        item("Pulihora"),
        item("Punugulu"),
        item("Chapati")
    );

    let set = validate_daily_menu_set(&raw).unwrap();
    assert_eq!(set.get(MealType::Breakfast)[0].name, "Pesarattu");
    assert_eq!(set.get(MealType::Lunch)[0].name, "Pulihora");
    assert_eq!(set.get(MealType::Snack)[0].name, "Punugulu");
    assert_eq!(set.get(MealType::Dinner)[0].name, "Chapati");
}

#[test]
fn test_daily_set_missing_meal_is_rejected() {
    let raw = format!(
        r#"{{"breakfast": [{}], "lunch": [{}], "dinner": [{}]}}"#,
        item("Idli"),
        item("Biryani"),
        item("Rasam")
    );

    match validate_daily_menu_set(&raw) {
        Err(MenuValidationError::Schema(message)) => assert!(message.contains("snack")),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_validation_errors_map_to_invalid_format() {
    let err: AppError = validate_meal_menu("nothing here").unwrap_err().into();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert_eq!(err.http_status(), 400);
}
