// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: clap value parsers for nutriplan-cli
// ABOUTME: Food categories and dietary restrictions from their kebab-case names

use nutriplan::models::{DietaryRestriction, FoodCategory};

/// Parse a food category name
pub fn parse_category(value: &str) -> Result<FoodCategory, String> {
    FoodCategory::from_str_lossy(value).ok_or_else(|| {
        format!("unknown category '{value}' (expected protein, carb, fat, vegetable, fruit or dairy)")
    })
}

/// Parse a dietary restriction name
pub fn parse_restriction(value: &str) -> Result<DietaryRestriction, String> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase())).map_err(|_| {
        format!(
            "unknown restriction '{value}' (expected vegetarian, vegan, pescatarian, gluten-free or lactose-free)"
        )
    })
}
