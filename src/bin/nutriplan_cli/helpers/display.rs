// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Fixed-width food table rows

use nutriplan::models::FoodRecord;

/// Column headings for food rows
pub fn display_food_header() {
    println!(
        "{:<24} {:<10} {:>7} {:>7} {:>7} {:>7} {:>9}  allergens",
        "name", "category", "kcal", "prot", "carbs", "fat", "serving"
    );
    println!("{}", "=".repeat(90));
}

/// One food row; values per 100 g or per unit
pub fn display_food_row(food: &FoodRecord) {
    let serving = format!("{}{}", food.serving_size, food.unit.label());
    println!(
        "{:<24} {:<10} {:>7.0} {:>7.1} {:>7.1} {:>7.1} {:>9}  {}",
        food.name,
        food.category,
        food.calories,
        food.protein_g,
        food.carbs_g,
        food.fat_g,
        serving,
        food.allergens.join(", ")
    );
}
