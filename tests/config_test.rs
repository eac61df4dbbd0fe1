// ABOUTME: Tests for nutrition configuration loading from environment overrides
// ABOUTME: Overrides flow into planning; malformed or out-of-range values are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use chrono::Weekday;
use nutriplan::{
    catalog::FoodCatalog,
    config::{ConfigError, NutritionConfig},
    errors::{AppError, ErrorCode},
    intelligence::NutritionPlanner,
    models::{ActivityType, DayActivity, Goal},
};
use serial_test::serial;

mod common;

/// Sets environment variables for the duration of a test
struct EnvGuard {
    names: Vec<&'static str>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (name, value) in vars {
            env::set_var(name, value);
        }
        Self {
            names: vars.iter().map(|(name, _)| *name).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for name in &self.names {
            env::remove_var(name);
        }
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    common::init_test_logging();
    let config = NutritionConfig::load().unwrap();
    assert_eq!(config, NutritionConfig::default());
}

#[test]
#[serial]
fn test_energy_overrides_change_the_day_target() {
    let _guard = EnvGuard::set(&[
        ("NUTRIPLAN_RUNNING_KCAL_PER_MIN", "12"),
        ("NUTRIPLAN_STEP_BASELINE", "8000"),
    ]);

    let config = NutritionConfig::load().unwrap();
    assert!((config.energy.running_kcal_per_min - 12.0).abs() < f64::EPSILON);
    assert_eq!(config.energy.step_baseline, 8000);

    let planner = NutritionPlanner::new(config, FoodCatalog::standard());
    let day = DayActivity::single(Weekday::Tue, ActivityType::Running, 30);
    let energy = planner
        .day_energy(&common::reference_profile(Goal::Maintain), &day)
        .unwrap();

    // 2166 + 30 * 12; 8000 steps no longer above the baseline
    assert!((energy.activity_calories - 360.0).abs() < 1e-9);
    assert!(energy.steps_calories.abs() < f64::EPSILON);
    assert!((energy.tdee - 2526.0).abs() < 1e-9);
}

#[test]
#[serial]
fn test_meal_overrides() {
    let _guard = EnvGuard::set(&[
        ("NUTRIPLAN_FALLBACK_MEALS_PER_DAY", "3"),
        ("NUTRIPLAN_MIN_CARBS_G", " 80 "),
        ("NUTRIPLAN_SUBSTITUTION_TOLERANCE_KCAL", "50"),
    ]);

    let config = NutritionConfig::load().unwrap();
    assert_eq!(config.meal_allocation.fallback_meals_per_day, 3);
    assert!((config.macros.min_carbs_g - 80.0).abs() < f64::EPSILON);
    assert!((config.substitution.calorie_tolerance_kcal - 50.0).abs() < f64::EPSILON);

    let planner = NutritionPlanner::new(config, FoodCatalog::standard());
    let profile = common::reference_profile(Goal::Lose).with_meals_per_day(9);
    let plan = planner
        .generate_weekly_plan_seeded(&profile, &common::mixed_week(), 4)
        .unwrap();
    assert!(plan.days.iter().all(|day| day.meals.len() == 3));
}

#[test]
#[serial]
fn test_unparsable_override_is_a_parse_error() {
    let _guard = EnvGuard::set(&[("NUTRIPLAN_SEDENTARY_FACTOR", "lots")]);

    let error = NutritionConfig::load().unwrap_err();
    assert!(matches!(
        error,
        ConfigError::Parse(ref msg) if msg.contains("NUTRIPLAN_SEDENTARY_FACTOR")
    ));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    let _guard = EnvGuard::set(&[("NUTRIPLAN_FALLBACK_MEALS_PER_DAY", "8")]);

    let error = NutritionConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidRange(_)));

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_negative_step_burn_is_rejected() {
    let _guard = EnvGuard::set(&[("NUTRIPLAN_KCAL_PER_EXTRA_STEP", "-0.04")]);

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_config_from_json_document() {
    let mut json = serde_json::to_value(NutritionConfig::default()).unwrap();
    json["energy"]["sedentary_factor"] = serde_json::json!(1.375);

    let config: NutritionConfig = serde_json::from_value(json).unwrap();
    config.validate().unwrap();
    assert!((config.energy.sedentary_factor - 1.375).abs() < f64::EPSILON);
    assert_eq!(config.meal_allocation.templates.len(), 4);
}
