// ABOUTME: Tests for the energy model: Mifflin-St Jeor BMR, activity and step burn, TDEE
// ABOUTME: Covers the worked reference examples, monotonicity and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Weekday;
use nutriplan::{
    config::NutritionConfig,
    errors::ErrorCode,
    intelligence::energy_model::{
        calculate_activity_calories, calculate_bmr, calculate_day_tdee, calculate_steps_calories,
    },
    models::{ActivitySession, ActivityType, DayActivity, Goal, Sex, UserProfile},
};

mod common;

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    common::init_test_logging();
    let config = NutritionConfig::default();

    // 10 * 80 + 6.25 * 180 - 5 * 25 + 5 = 1805
    let bmr = calculate_bmr(&common::reference_profile(Goal::Maintain), &config.bmr).unwrap();
    assert!((bmr - 1805.0).abs() < 1e-9, "BMR was {bmr}");
}

#[test]
fn test_bmr_female() {
    let config = NutritionConfig::default();

    // 10 * 62 + 6.25 * 168 - 5 * 34 - 161 = 1339
    let bmr = calculate_bmr(&common::female_profile(Goal::Lose), &config.bmr).unwrap();
    assert!((bmr - 1339.0).abs() < 1e-9, "BMR was {bmr}");
}

#[test]
fn test_bmr_sex_offset_is_166_kcal() {
    let config = NutritionConfig::default();
    let male = UserProfile::new(Sex::Male, 70.0, 175.0, 40, Goal::Maintain);
    let female = UserProfile::new(Sex::Female, 70.0, 175.0, 40, Goal::Maintain);

    let diff = calculate_bmr(&male, &config.bmr).unwrap()
        - calculate_bmr(&female, &config.bmr).unwrap();
    assert!((diff - 166.0).abs() < 1e-9);
}

#[test]
fn test_bmr_rejects_non_positive_biometrics() {
    let config = NutritionConfig::default();

    for profile in [
        UserProfile::new(Sex::Male, 0.0, 180.0, 25, Goal::Maintain),
        UserProfile::new(Sex::Male, -70.0, 180.0, 25, Goal::Maintain),
        UserProfile::new(Sex::Male, 80.0, 0.0, 25, Goal::Maintain),
        UserProfile::new(Sex::Male, 80.0, 180.0, 0, Goal::Maintain),
        UserProfile::new(Sex::Male, f64::NAN, 180.0, 25, Goal::Maintain),
    ] {
        let error = calculate_bmr(&profile, &config.bmr).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

// ============================================================================
// Activity calories
// ============================================================================

#[test]
fn test_activity_rates() {
    let config = NutritionConfig::default();

    let strength = DayActivity::single(Weekday::Mon, ActivityType::StrengthTraining, 60);
    let swimming = DayActivity::single(Weekday::Tue, ActivityType::Swimming, 60);
    let running = DayActivity::single(Weekday::Wed, ActivityType::Running, 60);

    assert!((calculate_activity_calories(&strength, &config.energy) - 390.0).abs() < 1e-9);
    assert!((calculate_activity_calories(&swimming, &config.energy) - 540.0).abs() < 1e-9);
    assert!((calculate_activity_calories(&running, &config.energy) - 600.0).abs() < 1e-9);
}

#[test]
fn test_combined_activities_add_up() {
    let config = NutritionConfig::default();
    let day = DayActivity::new(
        Weekday::Thu,
        vec![
            ActivitySession::new(ActivityType::StrengthTraining, 60),
            ActivitySession::new(ActivityType::Swimming, 30),
        ],
    )
    .unwrap();

    // 60 * 6.5 + 30 * 9.0
    assert!((calculate_activity_calories(&day, &config.energy) - 660.0).abs() < 1e-9);
}

#[test]
fn test_rest_day_burns_nothing_whatever_the_duration() {
    let config = NutritionConfig::default();

    for minutes in [0, 30, 90, 600] {
        let day = DayActivity::single(Weekday::Sun, ActivityType::Rest, minutes);
        assert!(calculate_activity_calories(&day, &config.energy).abs() < f64::EPSILON);
    }
}

// ============================================================================
// Step calories
// ============================================================================

#[test]
fn test_steps_at_or_below_baseline_contribute_nothing() {
    let config = NutritionConfig::default();

    for steps in [0, 1200, 4999, 5000] {
        assert!(
            calculate_steps_calories(steps, &config.energy).abs() < f64::EPSILON,
            "{steps} steps should add nothing"
        );
    }
}

#[test]
fn test_steps_above_baseline_strictly_increase() {
    let config = NutritionConfig::default();

    let mut previous = calculate_steps_calories(5000, &config.energy);
    for steps in (5001..=20_001).step_by(500) {
        let current = calculate_steps_calories(steps, &config.energy);
        assert!(current > previous, "{steps} steps did not increase burn");
        previous = current;
    }

    assert!((calculate_steps_calories(8000, &config.energy) - 120.0).abs() < 1e-9);
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_tdee_worked_example() {
    let config = NutritionConfig::default();
    let profile = common::reference_profile(Goal::Maintain);
    let day = DayActivity::single(Weekday::Mon, ActivityType::StrengthTraining, 60);

    let bmr = calculate_bmr(&profile, &config.bmr).unwrap();
    let activity = calculate_activity_calories(&day, &config.energy);
    let steps = calculate_steps_calories(profile.daily_steps, &config.energy);
    let tdee = calculate_day_tdee(bmr, activity, steps, &config.energy);

    // round(1805 * 1.2) + 390 + 120 = 2166 + 390 + 120
    assert!((tdee - 2676.0).abs() < 1e-9, "TDEE was {tdee}");
}

#[test]
fn test_tdee_rounds_only_the_sedentary_part() {
    let config = NutritionConfig::default();

    // 1339 * 1.2 = 1606.8 -> 1607
    let tdee = calculate_day_tdee(1339.0, 0.5, 0.25, &config.energy);
    assert!((tdee - 1607.75).abs() < 1e-9);
}

#[test]
fn test_tdee_monotonic_in_activity_and_steps() {
    let config = NutritionConfig::default();
    let bmr = 1805.0;

    let mut previous = calculate_day_tdee(bmr, 0.0, 0.0, &config.energy);
    for activity in [0.0, 50.0, 390.0, 660.0, 1200.0] {
        for steps in [0.0, 40.0, 120.0, 600.0] {
            let tdee = calculate_day_tdee(bmr, activity, steps, &config.energy);
            assert!(tdee >= calculate_day_tdee(bmr, activity, 0.0, &config.energy));
            assert!(tdee >= calculate_day_tdee(bmr, 0.0, steps, &config.energy));
        }
        let tdee = calculate_day_tdee(bmr, activity, 0.0, &config.energy);
        assert!(tdee >= previous);
        previous = tdee;
    }
}
