// ABOUTME: Static Andhra dish catalog served whenever model output is unusable
// ABOUTME: Five dishes per meal with fixed macros and calories scaled to the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mindful Menu Contributors

use super::{DailyMenuSet, MealMenu, MealTargets, MealType, MenuItem};
use crate::constants::meals::ITEMS_PER_MEAL;

/// (name, protein g, carbs g, fiber g)
type Dish = (&'static str, f64, f64, f64);

const BREAKFAST: [Dish; 5] = [
    ("Andhra Upma with Coconut", 8.0, 45.0, 4.0),
    ("Pesarattu with Allam Chutney", 12.0, 35.0, 6.0),
    ("Idli with Gongura Chutney", 6.0, 35.0, 5.0),
    ("Masala Dosa with Coconut Chutney", 5.0, 40.0, 3.0),
    ("Ven Pongal with Ghee", 10.0, 50.0, 4.0),
];

const LUNCH: [Dish; 5] = [
    ("Andhra Chicken Curry with Rice", 30.0, 55.0, 6.0),
    ("Gongura Dal with Rice", 15.0, 65.0, 8.0),
    ("Andhra Vegetable Biryani", 12.0, 70.0, 5.0),
    ("Chepala Pulusu (Fish Curry)", 25.0, 50.0, 4.0),
    ("Royyala Iguru (Prawn Curry)", 18.0, 60.0, 10.0),
];

const SNACK: [Dish; 5] = [
    ("Mirchi Bajji with Tea", 6.0, 25.0, 3.0),
    ("Ulli Vada with Chutney", 5.0, 20.0, 2.0),
    ("Banana Chips with Red Chili", 2.0, 28.0, 3.0),
    ("Roasted Peanuts with Curry Leaves", 8.0, 8.0, 4.0),
    ("Fresh Mango with Red Chili Powder", 2.0, 25.0, 4.0),
];

const DINNER: [Dish; 5] = [
    ("Andhra Rasam with Rice", 4.0, 40.0, 3.0),
    ("Gongura Sambar with Rice", 8.0, 45.0, 6.0),
    ("Curd Rice with Andhra Pickle", 6.0, 35.0, 2.0),
    ("Chapati with Dalcha", 12.0, 40.0, 5.0),
    ("Andhra Vegetable Curry with Rice", 8.0, 55.0, 7.0),
];

const fn dishes(meal_type: MealType) -> &'static [Dish; 5] {
    match meal_type {
        MealType::Breakfast => &BREAKFAST,
        MealType::Lunch => &LUNCH,
        MealType::Snack => &SNACK,
        MealType::Dinner => &DINNER,
    }
}

/// Fallback menu for a meal; each dish gets `target_calories / 5` (integer division)
#[must_use]
pub fn fallback_menu(meal_type: MealType, target_calories: u32) -> MealMenu {
    let per_item = f64::from(target_calories / ITEMS_PER_MEAL);

    dishes(meal_type)
        .iter()
        .map(|&(name, protein, carbs, fiber)| MenuItem::new(name, per_item, protein, carbs, fiber))
        .collect()
}

/// Fallback menus for a whole day
#[must_use]
pub fn fallback_daily_menu_set(targets: &MealTargets) -> DailyMenuSet {
    DailyMenuSet::from_fn(|meal_type| fallback_menu(meal_type, targets.for_meal(meal_type)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_calories_use_integer_division() {
        let menu = fallback_menu(MealType::Snack, 304);
        assert_eq!(menu.len(), 5);
        assert!(menu.iter().all(|item| (item.calories - 60.0).abs() < f64::EPSILON));
        assert_eq!(menu[0].name, "Mirchi Bajji with Tea");
    }
}
