// ABOUTME: Tests for loading plan requests and custom food tables from JSON files
// ABOUTME: Happy paths plus the error codes for missing, malformed and invalid documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Weekday;
use nutriplan::{
    catalog::FoodCatalog,
    config::NutritionConfig,
    errors::ErrorCode,
    intelligence::NutritionPlanner,
    models::{ActivityType, DietaryRestriction, FoodCategory, Goal, Sex},
    request::PlanRequest,
};
use tempfile::TempDir;

mod common;

const REQUEST: &str = r#"{
  "profile": {
    "sex": "female",
    "weight_kg": 62,
    "height_cm": 168,
    "age": 34,
    "daily_steps": 6500,
    "goal": "lose",
    "meals_per_day": 4,
    "allergies": ["Nuts"],
    "dietary_restrictions": ["vegetarian"]
  },
  "week": [
    {"day": "Sun"},
    {"day": "Mon", "sessions": [{"activity": "strength-training", "duration_minutes": 60}]},
    {"day": "Tue", "sessions": [{"activity": "running", "duration_minutes": 40}]},
    {"day": "Wed", "sessions": [{"activity": "rest"}]},
    {"day": "Thu", "sessions": [
      {"activity": "swimming", "duration_minutes": 30},
      {"activity": "running", "duration_minutes": 20}
    ]},
    {"day": "Fri"},
    {"day": "Sat", "sessions": [{"activity": "strength-training", "duration_minutes": 45}]}
  ],
  "seed": 42
}"#;

const FOODS: &str = r#"[
  {"name": "Lentejas", "calories": 116, "protein_g": 9, "carbs_g": 20, "fat_g": 0.4,
   "serving_size": 200, "category": "protein", "origin": "plant"},
  {"name": "Arroz", "calories": 130, "protein_g": 2.7, "carbs_g": 28, "fat_g": 0.3,
   "serving_size": 150, "category": "carb", "origin": "plant"},
  {"name": "Tortilla de trigo", "calories": 150, "protein_g": 4, "carbs_g": 25, "fat_g": 3.5,
   "unit": "unit", "serving_size": 2, "category": "carb", "origin": "plant",
   "allergens": ["gluten"]},
  {"name": "Pimiento", "calories": 31, "protein_g": 1, "carbs_g": 6, "fat_g": 0.3,
   "serving_size": 150, "category": "vegetable", "origin": "plant"},
  {"name": "Aceite", "calories": 884, "protein_g": 0, "carbs_g": 0, "fat_g": 100,
   "serving_size": 10, "category": "fat", "origin": "plant"}
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

// ============================================================================
// Plan requests
// ============================================================================

#[test]
fn test_request_from_file() -> Result<()> {
    common::init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = write(&dir, "request.json", REQUEST)?;

    let request = PlanRequest::from_file(&path)?;

    assert_eq!(request.profile.sex, Sex::Female);
    assert_eq!(request.profile.goal, Goal::Lose);
    assert_eq!(request.profile.meals_per_day, 4);
    assert!(request.profile.normalized_allergies().contains("nuts"));
    assert_eq!(
        request.profile.dietary_restrictions,
        vec![DietaryRestriction::Vegetarian]
    );
    assert_eq!(request.seed, Some(42));

    // Days are reordered Monday first; missing sessions mean rest
    let days: Vec<Weekday> = request.week.days().iter().map(|d| d.day()).collect();
    assert_eq!(days[0], Weekday::Mon);
    assert_eq!(days[6], Weekday::Sun);
    assert!(request.week.day(Weekday::Fri).unwrap().is_rest_day());
    assert!(request.week.day(Weekday::Thu).unwrap().is_combined());
    assert_eq!(
        request.week.day(Weekday::Sat).unwrap().activity_types(),
        vec![ActivityType::StrengthTraining]
    );
    Ok(())
}

#[test]
fn test_request_defaults() -> Result<()> {
    let mut value: serde_json::Value = serde_json::from_str(REQUEST)?;
    let profile = value["profile"].as_object_mut().unwrap();
    for key in ["daily_steps", "meals_per_day", "allergies", "dietary_restrictions"] {
        profile.remove(key);
    }
    value.as_object_mut().unwrap().remove("seed");

    let request = PlanRequest::from_json_str(&value.to_string())?;
    assert_eq!(request.profile.daily_steps, 0);
    assert_eq!(request.profile.meals_per_day, 5);
    assert!(request.profile.allergies.is_empty());
    assert!(request.seed.is_none());
    Ok(())
}

#[test]
fn test_seeded_request_is_reproducible() -> Result<()> {
    let request = PlanRequest::from_json_str(REQUEST)?;
    let planner = NutritionPlanner::default();
    let seed = request.seed.unwrap();

    let first = planner.generate_weekly_plan_seeded(&request.profile, &request.week, seed)?;
    let second = planner.generate_weekly_plan_seeded(&request.profile, &request.week, seed)?;
    assert_eq!(first.days, second.days);
    assert!(first.days.iter().all(|d| d.meals.len() == 4));
    Ok(())
}

#[test]
fn test_missing_request_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = PlanRequest::from_file(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_request_is_format_error() {
    let six_days = REQUEST.replace(r#"{"day": "Sun"},"#, "");
    let rest_and_run = REQUEST.replace(
        r#"{"activity": "rest"}"#,
        r#"{"activity": "rest"}, {"activity": "running", "duration_minutes": 10}"#,
    );

    for json in [
        "{ not json",
        r#"{"profile": {"sex": "male"}, "week": []}"#,
        six_days.as_str(),
        rest_and_run.as_str(),
    ] {
        let error = PlanRequest::from_json_str(json).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat, "{json}");
    }
}

#[test]
fn test_invalid_biometrics_are_rejected_on_load() {
    let json = REQUEST.replace(r#""weight_kg": 62"#, r#""weight_kg": -62"#);
    let error = PlanRequest::from_json_str(&json).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// Custom food tables
// ============================================================================

#[test]
fn test_food_table_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write(&dir, "foods.json", FOODS)?;

    let catalog = FoodCatalog::from_json_file(&path)?;
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.by_category(FoodCategory::Carb).count(), 2);

    let tortilla = catalog.find("tortilla de trigo").unwrap();
    assert!((tortilla.serving_size - 2.0).abs() < f64::EPSILON);
    assert!(tortilla.has_allergen("GLUTEN"));
    Ok(())
}

#[test]
fn test_plan_with_custom_food_table() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = FoodCatalog::from_json_file(write(&dir, "foods.json", FOODS)?)?;
    let planner = NutritionPlanner::new(NutritionConfig::default(), catalog);
    let profile =
        common::female_profile(Goal::Maintain).with_restriction(DietaryRestriction::GlutenFree);

    let plan = planner.generate_weekly_plan_seeded(&profile, &common::mixed_week(), 3)?;
    let names: Vec<&str> = plan
        .days
        .iter()
        .flat_map(|d| d.meals.iter())
        .flat_map(|m| m.foods().iter())
        .map(|f| f.name.as_str())
        .collect();

    assert!(names.contains(&"Lentejas"));
    assert!(!names.contains(&"Tortilla de trigo"));
    Ok(())
}

#[test]
fn test_bad_food_tables() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let missing = FoodCatalog::from_json_file(dir.path().join("none.json")).unwrap_err();
    assert_eq!(missing.code, ErrorCode::StorageError);

    let not_a_list = write(&dir, "object.json", r#"{"name": "Arroz"}"#)?;
    let error = FoodCatalog::from_json_file(not_a_list).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let negative = FOODS.replace(r#""calories": 31"#, r#""calories": -31"#);
    let negative = write(&dir, "negative.json", &negative)?;
    let error = FoodCatalog::from_json_file(negative).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let empty_serving = FOODS.replace(r#""serving_size": 10"#, r#""serving_size": 0"#);
    let empty_serving = write(&dir, "serving.json", &empty_serving)?;
    let error = FoodCatalog::from_json_file(empty_serving).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    Ok(())
}
