// ABOUTME: Food table commands for nutriplan-cli
// ABOUTME: Lists foods by category and substitutes for a given food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use nutriplan::catalog::FoodCatalog;
use nutriplan::models::{DietaryRestriction, FoodCategory, FoodRecord};

use crate::helpers::display::{display_food_header, display_food_row};

/// Print the food table, optionally for one category
pub fn list(catalog: &FoodCatalog, category: Option<FoodCategory>) {
    let foods: Vec<&FoodRecord> = match category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.foods().iter().collect(),
    };

    display_food_header();
    for food in foods {
        display_food_row(food);
    }
}

/// Print substitutes for a food
pub fn alternatives(
    catalog: &FoodCatalog,
    food: &str,
    category: Option<FoodCategory>,
    allergies: &[String],
    restrictions: &[DietaryRestriction],
) {
    let category = category.unwrap_or_else(|| catalog.detect_category(food));
    let allergies: BTreeSet<String> = allergies
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .collect();

    let alternatives = catalog.alternatives(category, food, &allergies, restrictions);
    if alternatives.is_empty() {
        println!("No {category} alternatives for '{food}' with these filters");
        return;
    }

    println!("Alternatives for '{food}' ({category}):");
    display_food_header();
    for alternative in alternatives {
        display_food_row(alternative);
    }
}
