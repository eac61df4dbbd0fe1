// ABOUTME: Daily energy expenditure model: BMR, activity burn, step burn and TDEE
// ABOUTME: Mifflin-St Jeor BMR with a sedentary multiplier plus additive exercise and steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! TDEE is built additively: `round(BMR x sedentary factor)` covers daily
//! living, scheduled activities and steps above a baseline are added on top.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{DayActivity, Sex, UserProfile};

use crate::config::{BmrConfig, EnergyConfig};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive weight, height or age
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> AppResult<f64> {
    profile.validate()?;

    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Calories burned by a day's scheduled activities
///
/// Sums `duration x rate` over real activities; rest contributes nothing
/// whatever duration it carries.
#[must_use]
pub fn calculate_activity_calories(day: &DayActivity, config: &EnergyConfig) -> f64 {
    day.training_sessions()
        .map(|session| f64::from(session.duration_minutes) * config.kcal_per_minute(session.activity))
        .sum()
}

/// Calories from steps above the baseline
///
/// Steps up to the baseline are already covered by the sedentary factor.
#[must_use]
pub fn calculate_steps_calories(steps: u32, config: &EnergyConfig) -> f64 {
    f64::from(steps.saturating_sub(config.step_baseline)) * config.kcal_per_extra_step
}

/// Total Daily Energy Expenditure
///
/// Formula: TDEE = round(BMR x sedentary factor) + activity kcal + steps kcal
#[must_use]
pub fn calculate_day_tdee(
    bmr: f64,
    activity_calories: f64,
    steps_calories: f64,
    config: &EnergyConfig,
) -> f64 {
    (bmr * config.sedentary_factor).round() + activity_calories + steps_calories
}
