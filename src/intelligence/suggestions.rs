// ABOUTME: Deterministic rule-based nutrition advice keyed on daily intake deltas
// ABOUTME: Used whenever the model suggestion call fails or returns too little text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

//! Suggestion fallback generator
//!
//! Produces exactly three bullet lines. The largest gap among calories,
//! protein and fiber selects up to two targeted lines; generic advice fills
//! the remaining slots in a fixed order.

use crate::constants::meals::SUGGESTION_LINES;

/// Calorie gap (kcal) beyond which calorie advice is given
const CALORIE_THRESHOLD: f64 = 200.0;
/// Protein gap (g) beyond which protein advice is given
const PROTEIN_THRESHOLD: f64 = 10.0;
/// Fiber deficit (g) beyond which fiber advice is given
const FIBER_THRESHOLD: f64 = 5.0;

const CALORIE_DEFICIT: [&str; 2] = [
    "• Add Andhra snacks like roasted peanuts or banana chips to increase calories",
    "• Include an extra serving of rice with your meals",
];

const CALORIE_SURPLUS: [&str; 2] = [
    "• Reduce portion sizes, especially rice and oil in curries",
    "• Choose lighter Andhra options like rasam rice instead of heavy curries",
];

const PROTEIN_DEFICIT: [&str; 2] = [
    "• Include more dal, chicken curry, or fish curry in your meals",
    "• Add protein-rich Andhra snacks like roasted chana or boiled eggs",
];

const PROTEIN_SURPLUS: [&str; 1] = ["• Balance with more vegetables and reduce meat portions"];

const FIBER_DEFICIT: [&str; 2] = [
    "• Include more vegetables in your Andhra meals",
    "• Add fruits like banana or apple as snacks",
];

/// Generic advice, appended in this order until three lines exist
pub const FILLER_LINES: [&str; 3] = [
    "• Maintain balanced portions of rice, dal, and vegetables",
    "• Stay hydrated with water and buttermilk",
    "• Consider traditional Andhra snacks like pesarattu or upma",
];

/// Build three advice lines from intake deltas (negative means deficit)
///
/// The carbohydrate delta is accepted alongside the others so callers pass
/// the same four values they give the model, but no rule reads it.
#[must_use]
pub fn suggest(calorie_diff: f64, protein_diff: f64, _carb_diff: f64, fiber_diff: f64) -> String {
    let targeted = targeted_lines(calorie_diff, protein_diff, fiber_diff);

    targeted
        .iter()
        .chain(FILLER_LINES.iter())
        .take(SUGGESTION_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

fn targeted_lines(calorie_diff: f64, protein_diff: f64, fiber_diff: f64) -> &'static [&'static str] {
    let (calorie_gap, protein_gap, fiber_gap) =
        (calorie_diff.abs(), protein_diff.abs(), fiber_diff.abs());

    if calorie_gap > protein_gap && calorie_gap > fiber_gap {
        if calorie_diff < -CALORIE_THRESHOLD {
            &CALORIE_DEFICIT
        } else if calorie_diff > CALORIE_THRESHOLD {
            &CALORIE_SURPLUS
        } else {
            &[]
        }
    } else if protein_gap > fiber_gap {
        if protein_diff < -PROTEIN_THRESHOLD {
            &PROTEIN_DEFICIT
        } else if protein_diff > PROTEIN_THRESHOLD {
            &PROTEIN_SURPLUS
        } else {
            &[]
        }
    } else if fiber_diff < -FIBER_THRESHOLD {
        &FIBER_DEFICIT
    } else {
        &[]
    }
}
