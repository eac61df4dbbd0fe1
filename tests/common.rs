// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, sample profiles, weeks and food tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`

use std::sync::Once;

use chrono::Weekday;
use nutriplan::catalog::FoodCatalog;
use nutriplan::models::{
    ActivitySession, ActivityType, DayActivity, FoodCategory, FoodOrigin, FoodRecord, Goal,
    ServingUnit, Sex, UserProfile, WeeklyActivity,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Male, 80 kg, 180 cm, 25 years, 8000 steps
pub fn reference_profile(goal: Goal) -> UserProfile {
    UserProfile::new(Sex::Male, 80.0, 180.0, 25, goal).with_steps(8000)
}

/// Female, 62 kg, 168 cm, 34 years, 6500 steps
pub fn female_profile(goal: Goal) -> UserProfile {
    UserProfile::new(Sex::Female, 62.0, 168.0, 34, goal).with_steps(6500)
}

/// Mixed week: single sessions, a double day and rest days
///
/// Mon strength 60, Tue running 45, Wed rest, Thu strength 60 + swimming 30,
/// Fri swimming 45, Sat strength 50 + running 30 + swimming 20, Sun rest.
pub fn mixed_week() -> WeeklyActivity {
    WeeklyActivity::from_fn(|day| match day {
        Weekday::Mon => DayActivity::single(day, ActivityType::StrengthTraining, 60),
        Weekday::Tue => DayActivity::single(day, ActivityType::Running, 45),
        Weekday::Thu => DayActivity::new(
            day,
            vec![
                ActivitySession::new(ActivityType::StrengthTraining, 60),
                ActivitySession::new(ActivityType::Swimming, 30),
            ],
        )
        .unwrap(),
        Weekday::Fri => DayActivity::single(day, ActivityType::Swimming, 45),
        Weekday::Sat => DayActivity::new(
            day,
            vec![
                ActivitySession::new(ActivityType::StrengthTraining, 50),
                ActivitySession::new(ActivityType::Running, 30),
                ActivitySession::new(ActivityType::Swimming, 20),
            ],
        )
        .unwrap(),
        _ => DayActivity::rest(day),
    })
}

/// Gram-measured record with a 100 g serving
pub fn food(
    name: &str,
    category: FoodCategory,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
) -> FoodRecord {
    FoodRecord {
        name: name.into(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        unit: ServingUnit::Grams,
        serving_size: 100.0,
        category,
        origin: FoodOrigin::Plant,
        allergens: Vec::new(),
    }
}

/// Single-macro foods with exact 4/4/9 energy, one per category
///
/// The protein and carb foods carry nothing else, so their portions match
/// the meal sub-targets up to rounding. The oil serving is 10 g.
pub fn lean_catalog() -> FoodCatalog {
    let mut starch = food("Pure starch", FoodCategory::Carb, 320.0, 0.0, 80.0, 0.0);
    starch.serving_size = 150.0;
    let mut oil = food("Pure oil", FoodCategory::Fat, 900.0, 0.0, 0.0, 100.0);
    oil.serving_size = 10.0;
    FoodCatalog::new(vec![
        food("Pure protein", FoodCategory::Protein, 320.0, 80.0, 0.0, 0.0),
        starch,
        food("Pure leaf", FoodCategory::Vegetable, 20.0, 0.0, 5.0, 0.0),
        oil,
    ])
}
